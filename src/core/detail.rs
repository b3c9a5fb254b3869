//! Detail page assembly.
//!
//! The pokemon record is required; species and evolution data are
//! best-effort and their sections are dropped when a lookup fails.

use crate::core::transforms::{
    compute_gender_ratio, extract_abilities, extract_description, extract_varieties,
    flatten_evolution_chain, Abilities, GenderRatio, SpeciesRef,
};
use crate::data::client::{Fetch, PokeApiClient};
use crate::data::records::{PokemonRecord, SpeciesRecord};
use crate::error::{DexError, Result};
use std::sync::Arc;
use tracing::info;

#[derive(Clone, Debug)]
pub struct DetailView {
    pub pokemon: Arc<PokemonRecord>,
    pub species: Option<Arc<SpeciesRecord>>,
    pub description: Option<String>,
    pub abilities: Abilities,
    pub gender: Option<GenderRatio>,
    pub varieties: Vec<SpeciesRef>,
    pub evolution: Vec<SpeciesRef>,
    /// Sections left out because a secondary lookup failed.
    pub omitted: Vec<DexError>,
}

pub async fn load_detail<F: Fetch>(client: &PokeApiClient<F>, name: &str) -> Result<DetailView> {
    let pokemon = client.get_pokemon(name).await?;
    info!(pokemon = %pokemon.name, id = pokemon.id, "loading detail");

    let mut view = DetailView {
        abilities: extract_abilities(&pokemon),
        pokemon: Arc::clone(&pokemon),
        species: None,
        description: None,
        gender: None,
        varieties: Vec::new(),
        evolution: Vec::new(),
        omitted: Vec::new(),
    };

    let species = match client.get_species(&pokemon.species.url).await {
        Ok(species) => species,
        Err(_) => {
            view.omitted.push(unavailable("species"));
            view.omitted.push(unavailable("evolution chain"));
            return Ok(view);
        }
    };

    view.description = Some(extract_description(Some(&species)));
    view.gender = Some(compute_gender_ratio(&species));
    view.varieties = extract_varieties(&species, &pokemon.name);

    match evolution_line(client, &species).await {
        Ok(line) => view.evolution = line,
        Err(err) => view.omitted.push(err),
    }

    view.species = Some(species);
    Ok(view)
}

/// Flattened evolution chain of a species.
pub async fn evolution_line<F: Fetch>(
    client: &PokeApiClient<F>,
    species: &SpeciesRecord,
) -> Result<Vec<SpeciesRef>> {
    let reference = species
        .evolution_chain
        .as_ref()
        .ok_or_else(|| unavailable("evolution chain"))?;
    let chain = client
        .get_evolution_chain(&reference.url)
        .await
        .map_err(|_| unavailable("evolution chain"))?;
    Ok(flatten_evolution_chain(&chain.chain))
}

fn unavailable(section: &str) -> DexError {
    DexError::PartialDataUnavailable {
        section: section.to_string(),
    }
}
