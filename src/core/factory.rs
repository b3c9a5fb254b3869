use crate::core::stats::{compute_all_real_stats, EffortValues, RealStats, StatTable};
use crate::data::items::ItemCatalog;
use crate::data::natures::{Nature, NatureDatabase};
use crate::data::records::PokemonRecord;
use crate::error::{DexError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MAX_MOVES: usize = 4;

/// One configured side of a matchup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonLoadout {
    pub species: String,
    pub moves: Vec<String>,
    pub item: Option<String>,
    pub nature: Nature,
    pub evs: EffortValues,
}

impl PokemonLoadout {
    /// Real stats at level 50, or `None` when the record lacks base stats.
    pub fn real_stats(&self, record: &PokemonRecord) -> Option<RealStats> {
        record
            .base_stats()
            .map(|base| compute_all_real_stats(&base, &self.evs, &self.nature))
    }
}

#[derive(Clone, Debug, Default)]
pub struct CreateLoadoutOptions {
    pub moves: Option<Vec<String>>,
    pub item: Option<String>,
    pub nature: Option<String>,
    pub evs: Option<StatTable>,
}

pub fn validate_moves(record: &PokemonRecord, requested_moves: &[String]) -> Result<Vec<String>> {
    if requested_moves.len() > MAX_MOVES {
        return Err(DexError::invalid(format!(
            "at most {} moves can be selected, got {}",
            MAX_MOVES,
            requested_moves.len()
        )));
    }

    let moves: Vec<String> = requested_moves
        .iter()
        .map(|m| m.trim().to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    if let Some(dup) = moves.iter().find(|m| !seen.insert(m.as_str())) {
        return Err(DexError::invalid(format!("move '{}' selected twice", dup)));
    }

    let invalid: Vec<String> = moves
        .iter()
        .filter(|m| !record.can_learn(m))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(DexError::invalid(format!(
            "Move(s) not learnable by '{}': {}",
            record.name,
            invalid.join(", ")
        )));
    }

    Ok(moves)
}

pub fn create_loadout(
    record: &PokemonRecord,
    options: CreateLoadoutOptions,
    items: &ItemCatalog,
    natures: &NatureDatabase,
) -> Result<PokemonLoadout> {
    let moves = validate_moves(record, options.moves.as_deref().unwrap_or(&[]))?;

    let item = match options.item.as_deref() {
        Some(input) => items.resolve(input)?,
        None => None,
    };

    let nature = match options.nature.as_deref() {
        Some(name) => natures
            .get(name)
            .cloned()
            .ok_or_else(|| DexError::invalid(format!("unknown nature '{}'", name)))?,
        None => natures.default_nature(),
    };

    let evs = EffortValues::new(options.evs.unwrap_or_default())?;

    Ok(PokemonLoadout {
        species: record.name.clone(),
        moves,
        item,
        nature,
        evs,
    })
}
