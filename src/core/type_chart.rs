//! Defensive type effectiveness.
//!
//! Each defending type contributes its damage relations; a multi-type
//! Pokemon's multiplier against an attacking type is the product of every
//! contribution.

use crate::data::records::DamageRelationsRecord;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::warn;

/// How much damage one defending type takes from attacking types.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    pub double_damage_from: BTreeSet<String>,
    pub half_damage_from: BTreeSet<String>,
    pub no_damage_from: BTreeSet<String>,
}

impl From<DamageRelationsRecord> for DamageRelations {
    fn from(record: DamageRelationsRecord) -> Self {
        let names = |list: Vec<crate::data::records::NamedResource>| {
            list.into_iter().map(|r| r.name).collect::<BTreeSet<_>>()
        };
        Self {
            double_damage_from: names(record.double_damage_from),
            half_damage_from: names(record.half_damage_from),
            no_damage_from: names(record.no_damage_from),
        }
    }
}

/// Attacking type -> multiplier. Types never mentioned are neutral (1.0).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeEffectivenessMap(BTreeMap<String, f64>);

impl TypeEffectivenessMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one defending type's relations into the running product.
    pub fn apply(&mut self, relations: &DamageRelations) {
        let groups = [
            (&relations.double_damage_from, 2.0),
            (&relations.half_damage_from, 0.5),
            (&relations.no_damage_from, 0.0),
        ];
        for (types, factor) in groups {
            for attacking in types {
                *self.0.entry(attacking.clone()).or_insert(1.0) *= factor;
            }
        }
    }

    pub fn get(&self, attacking: &str) -> f64 {
        self.0.get(attacking).copied().unwrap_or(1.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, &m)| (name.as_str(), m))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn summarize(&self) -> EffectivenessSummary {
        let mut summary = EffectivenessSummary::default();
        for (name, multiplier) in self.iter() {
            if multiplier == 0.0 {
                summary.immunities.push(name.to_string());
            } else if multiplier > 1.0 {
                summary.weaknesses.push((name.to_string(), multiplier));
            } else if multiplier < 1.0 {
                summary.resistances.push((name.to_string(), multiplier));
            }
        }
        summary
            .weaknesses
            .sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        summary
            .resistances
            .sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        summary
    }
}

/// Display partition of a [`TypeEffectivenessMap`]; neutral entries dropped.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessSummary {
    pub weaknesses: Vec<(String, f64)>,
    pub resistances: Vec<(String, f64)>,
    pub immunities: Vec<String>,
}

/// Compose the damage relations of every defending type.
///
/// A type whose lookup returns `None` is skipped, leaving a partial map.
pub fn aggregate_effectiveness<S, F, R>(types: &[S], mut lookup: F) -> TypeEffectivenessMap
where
    S: AsRef<str>,
    F: FnMut(&str) -> Option<R>,
    R: Borrow<DamageRelations>,
{
    let mut map = TypeEffectivenessMap::new();
    for defending in types {
        let defending = defending.as_ref();
        match lookup(defending) {
            Some(relations) => map.apply(relations.borrow()),
            None => warn!(type_name = defending, "damage relations unavailable, skipping type"),
        }
    }
    map
}

/// `4.0` -> `"x4"`, `0.25` -> `"x0.25"`.
pub fn format_multiplier(multiplier: f64) -> String {
    if multiplier.fract() == 0.0 {
        format!("x{}", multiplier as i64)
    } else {
        format!("x{}", multiplier)
    }
}

pub const TYPE_NAMES: [&str; 18] = [
    "normal", "fighting", "flying", "poison", "ground", "rock", "bug", "ghost", "steel", "fire",
    "water", "grass", "electric", "psychic", "ice", "dragon", "dark", "fairy",
];

/// Offline defensive chart for the 18 standard types.
#[derive(Clone, Debug)]
pub struct TypeChart {
    chart: HashMap<String, DamageRelations>,
}

impl TypeChart {
    pub fn standard() -> Self {
        let mut chart = HashMap::new();
        let mut add_entry = |type_name: &str, weak_to: &[&str], resists: &[&str], immune_to: &[&str]| {
            let set = |list: &[&str]| list.iter().map(|v| v.to_string()).collect::<BTreeSet<_>>();
            chart.insert(
                type_name.to_string(),
                DamageRelations {
                    double_damage_from: set(weak_to),
                    half_damage_from: set(resists),
                    no_damage_from: set(immune_to),
                },
            );
        };

        add_entry("normal", &["fighting"], &[], &["ghost"]);
        add_entry("fire", &["water", "ground", "rock"], &["fire", "grass", "ice", "bug", "steel", "fairy"], &[]);
        add_entry("water", &["electric", "grass"], &["fire", "water", "ice", "steel"], &[]);
        add_entry("electric", &["ground"], &["electric", "flying", "steel"], &[]);
        add_entry("grass", &["fire", "ice", "poison", "flying", "bug"], &["water", "electric", "grass", "ground"], &[]);
        add_entry("ice", &["fire", "fighting", "rock", "steel"], &["ice"], &[]);
        add_entry("fighting", &["flying", "psychic", "fairy"], &["bug", "rock", "dark"], &[]);
        add_entry("poison", &["ground", "psychic"], &["grass", "fighting", "poison", "bug", "fairy"], &[]);
        add_entry("ground", &["water", "grass", "ice"], &["poison", "rock"], &["electric"]);
        add_entry("flying", &["electric", "ice", "rock"], &["grass", "fighting", "bug"], &["ground"]);
        add_entry("psychic", &["bug", "ghost", "dark"], &["fighting", "psychic"], &[]);
        add_entry("bug", &["fire", "flying", "rock"], &["grass", "fighting", "ground"], &[]);
        add_entry("rock", &["water", "grass", "fighting", "ground", "steel"], &["normal", "fire", "poison", "flying"], &[]);
        add_entry("ghost", &["ghost", "dark"], &["poison", "bug"], &["normal", "fighting"]);
        add_entry("dragon", &["ice", "dragon", "fairy"], &["fire", "water", "electric", "grass"], &[]);
        add_entry("dark", &["fighting", "bug", "fairy"], &["ghost", "dark"], &["psychic"]);
        add_entry(
            "steel",
            &["fire", "fighting", "ground"],
            &["normal", "grass", "ice", "flying", "psychic", "bug", "rock", "dragon", "steel", "fairy"],
            &["poison"],
        );
        add_entry("fairy", &["poison", "steel"], &["fighting", "bug", "dark"], &["dragon"]);

        Self { chart }
    }

    pub fn relations(&self, type_name: &str) -> Option<&DamageRelations> {
        self.chart.get(&type_name.to_lowercase())
    }

    pub fn defensive_map<S: AsRef<str>>(&self, types: &[S]) -> TypeEffectivenessMap {
        aggregate_effectiveness(types, |t| self.relations(t))
    }

    /// Multiplier of a single attacking type against a type combination.
    pub fn effectiveness<S: AsRef<str>>(&self, attacking: &str, defending: &[S]) -> f64 {
        if attacking.is_empty() {
            return 1.0;
        }
        self.defensive_map(defending).get(&attacking.to_lowercase())
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}
