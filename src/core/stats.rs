//! Real stat calculation.
//!
//! Converts species base stats into the in-battle values at a given level
//! with individual values, effort values and a nature applied.

use crate::data::natures::Nature;
use crate::error::{DexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level every calculation in the app is done at.
pub const BATTLE_LEVEL: u32 = 50;
/// Individual values are fixed at the maximum.
pub const MAX_IV: u32 = 31;
pub const MAX_LEVEL: u32 = 100;
pub const MAX_BASE_STAT: u32 = 255;
pub const MAX_EV_PER_STAT: u32 = 252;
pub const MAX_EV_TOTAL: u32 = 510;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatName {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatName {
    pub const ALL: [StatName; 6] = [
        StatName::Hp,
        StatName::Attack,
        StatName::Defense,
        StatName::SpecialAttack,
        StatName::SpecialDefense,
        StatName::Speed,
    ];

    /// Provider spelling, e.g. `special-attack`.
    pub fn as_str(self) -> &'static str {
        match self {
            StatName::Hp => "hp",
            StatName::Attack => "attack",
            StatName::Defense => "defense",
            StatName::SpecialAttack => "special-attack",
            StatName::SpecialDefense => "special-defense",
            StatName::Speed => "speed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatName::Hp => "HP",
            StatName::Attack => "Attack",
            StatName::Defense => "Defense",
            StatName::SpecialAttack => "Sp. Atk",
            StatName::SpecialDefense => "Sp. Def",
            StatName::Speed => "Speed",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            StatName::Hp => "HP",
            StatName::Attack => "Atk",
            StatName::Defense => "Def",
            StatName::SpecialAttack => "SpA",
            StatName::SpecialDefense => "SpD",
            StatName::Speed => "Spd",
        }
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatName {
    type Err = DexError;

    fn from_str(s: &str) -> Result<Self> {
        StatName::ALL
            .into_iter()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| DexError::invalid(format!("unknown stat '{}'", s)))
    }
}

/// One value per stat. Used for base stats, effort values and real stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StatTable {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

pub type BaseStats = StatTable;
pub type RealStats = StatTable;

impl StatTable {
    pub fn get(&self, stat: StatName) -> u32 {
        match stat {
            StatName::Hp => self.hp,
            StatName::Attack => self.attack,
            StatName::Defense => self.defense,
            StatName::SpecialAttack => self.special_attack,
            StatName::SpecialDefense => self.special_defense,
            StatName::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: StatName, value: u32) {
        match stat {
            StatName::Hp => self.hp = value,
            StatName::Attack => self.attack = value,
            StatName::Defense => self.defense = value,
            StatName::SpecialAttack => self.special_attack = value,
            StatName::SpecialDefense => self.special_defense = value,
            StatName::Speed => self.speed = value,
        }
    }

    pub fn total(&self) -> u32 {
        StatName::ALL.iter().map(|&stat| self.get(stat)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatName, u32)> + '_ {
        StatName::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }
}

/// Effort values: at most 252 per stat and 510 in total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffortValues(StatTable);

impl EffortValues {
    /// Checked constructor for values coming from outside the slider logic.
    pub fn new(table: StatTable) -> Result<Self> {
        let evs = Self(table);
        evs.validate()?;
        Ok(evs)
    }

    pub fn get(&self, stat: StatName) -> u32 {
        self.0.get(stat)
    }

    pub fn total(&self) -> u32 {
        self.0.total()
    }

    pub fn remaining(&self) -> u32 {
        MAX_EV_TOTAL.saturating_sub(self.total())
    }

    pub fn as_table(&self) -> &StatTable {
        &self.0
    }

    /// Set one stat's EV, capping the request at the per-stat maximum and at
    /// the headroom left by the other five. Returns the value applied.
    pub fn adjust(&mut self, stat: StatName, requested: u32) -> u32 {
        let others = self.total() - self.get(stat);
        let headroom = MAX_EV_TOTAL.saturating_sub(others);
        let applied = requested.min(MAX_EV_PER_STAT).min(headroom);
        self.0.set(stat, applied);
        applied
    }

    pub fn validate(&self) -> Result<()> {
        if let Some((stat, ev)) = self.0.iter().find(|&(_, ev)| ev > MAX_EV_PER_STAT) {
            return Err(DexError::invalid(format!(
                "EV for {} is {} (max {})",
                stat, ev, MAX_EV_PER_STAT
            )));
        }
        let total = self.total();
        if total > MAX_EV_TOTAL {
            return Err(DexError::invalid(format!(
                "EV total is {} (max {})",
                total, MAX_EV_TOTAL
            )));
        }
        Ok(())
    }
}

/// Raw stat formula without nature.
///
/// HP: `(2*Base + IV + EV/4) * Level / 100 + Level + 10`
/// Others: `(2*Base + IV + EV/4) * Level / 100 + 5`
///
/// Saturates at `u32::MAX`. [`compute_real_stat`] rejects out-of-range input instead.
pub fn calc_stat(base: u32, is_hp: bool, level: u32, iv: u32, ev: u32) -> u32 {
    checked_calc_stat(base, is_hp, level, iv, ev).unwrap_or(u32::MAX)
}

fn checked_calc_stat(base: u32, is_hp: bool, level: u32, iv: u32, ev: u32) -> Option<u32> {
    let sum = u64::from(base) * 2 + u64::from(iv) + u64::from(ev / 4);
    let scaled = sum.checked_mul(u64::from(level))? / 100;
    let stat = if is_hp {
        scaled + u64::from(level) + 10
    } else {
        scaled + 5
    };
    u32::try_from(stat).ok()
}

/// Apply the nature multiplier to an already floored stat.
///
/// `value * 11 / 10` is `floor(value * 1.1)` without float rounding.
pub fn apply_nature(stat: StatName, value: u32, nature: &Nature) -> u32 {
    u32::try_from(nature_scaled(stat, value, nature)).unwrap_or(u32::MAX)
}

fn nature_scaled(stat: StatName, value: u32, nature: &Nature) -> u64 {
    let value = u64::from(value);
    if stat == StatName::Hp {
        return value;
    }
    if nature.plus == Some(stat) {
        value * 11 / 10
    } else if nature.minus == Some(stat) {
        value * 9 / 10
    } else {
        value
    }
}

/// Checked single-stat calculation.
///
/// Rejects `base > 255`, `iv > 31`, `ev > 252` and levels outside `1..=100`
/// with `DexError::InvalidArgument`.
pub fn compute_real_stat(
    stat: StatName,
    base: u32,
    iv: u32,
    ev: u32,
    level: u32,
    nature: &Nature,
) -> Result<u32> {
    if base > MAX_BASE_STAT {
        return Err(DexError::invalid(format!(
            "base stat {} out of range 0..={}",
            base, MAX_BASE_STAT
        )));
    }
    if iv > MAX_IV {
        return Err(DexError::invalid(format!("IV {} out of range 0..={}", iv, MAX_IV)));
    }
    if ev > MAX_EV_PER_STAT {
        return Err(DexError::invalid(format!(
            "EV {} out of range 0..={}",
            ev, MAX_EV_PER_STAT
        )));
    }
    if level == 0 || level > MAX_LEVEL {
        return Err(DexError::invalid(format!(
            "level {} out of range 1..={}",
            level, MAX_LEVEL
        )));
    }

    let raw = calc_stat(base, stat == StatName::Hp, level, iv, ev);
    Ok(apply_nature(stat, raw, nature))
}

/// All six real stats at level 50 with max IVs.
pub fn compute_all_real_stats(base: &BaseStats, evs: &EffortValues, nature: &Nature) -> RealStats {
    let mut real = RealStats::default();
    for stat in StatName::ALL {
        let ev = evs.get(stat).min(MAX_EV_PER_STAT);
        let raw = calc_stat(base.get(stat), stat == StatName::Hp, BATTLE_LEVEL, MAX_IV, ev);
        real.set(stat, apply_nature(stat, raw, nature));
    }
    real
}
