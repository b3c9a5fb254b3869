//! Display facts derived from provider records.

use crate::data::records::{EvolutionNode, NamedResource, PokemonRecord, SpeciesRecord};
use serde::{Deserialize, Serialize};

pub const NO_DESCRIPTION: &str = "No description available.";

/// A species or form reference ready for display and navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRef {
    pub name: String,
    pub id: Option<u32>,
}

impl From<&NamedResource> for SpeciesRef {
    fn from(resource: &NamedResource) -> Self {
        Self {
            name: resource.name.clone(),
            id: resource.id(),
        }
    }
}

/// Pre-order walk of the evolution tree: each stage, then every branch's
/// subtree in full before the next sibling.
pub fn flatten_evolution_chain(root: &EvolutionNode) -> Vec<SpeciesRef> {
    let mut stages = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        stages.push(SpeciesRef::from(&node.species));
        stack.extend(node.evolves_to.iter().rev());
    }
    stages
}

/// First English flavor text, whitespace control characters flattened.
pub fn extract_description(species: Option<&SpeciesRecord>) -> String {
    let text = species.and_then(|s| {
        s.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| entry.flavor_text.as_str())
    });
    match text {
        Some(text) => text.replace(['\n', '\x0c'], " "),
        None => NO_DESCRIPTION.to_string(),
    }
}

/// Other forms of the species, excluding the one being shown.
pub fn extract_varieties(species: &SpeciesRecord, current_name: &str) -> Vec<SpeciesRef> {
    species
        .varieties
        .iter()
        .filter(|v| v.pokemon.name != current_name)
        .map(|v| SpeciesRef::from(&v.pokemon))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abilities {
    pub normal: Vec<String>,
    pub hidden: Option<String>,
}

impl Abilities {
    /// `"blaze | solar-power (Hidden)"`
    pub fn display(&self) -> String {
        let mut text = self.normal.join(", ");
        if let Some(hidden) = &self.hidden {
            text.push_str(&format!(" | {} (Hidden)", hidden));
        }
        text
    }
}

pub fn extract_abilities(pokemon: &PokemonRecord) -> Abilities {
    let mut slots: Vec<_> = pokemon.abilities.iter().collect();
    slots.sort_by_key(|a| a.slot);

    let mut abilities = Abilities::default();
    for slot in slots {
        if slot.is_hidden {
            abilities.hidden = Some(slot.ability.name.clone());
        } else {
            abilities.normal.push(slot.ability.name.clone());
        }
    }
    abilities
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenderRatio {
    Genderless,
    Ratio { male_percent: f64, female_percent: f64 },
}

impl GenderRatio {
    pub fn from_rate(gender_rate: i32) -> Self {
        if gender_rate < 0 {
            return GenderRatio::Genderless;
        }
        let female_percent = gender_rate as f64 / 8.0 * 100.0;
        GenderRatio::Ratio {
            male_percent: 100.0 - female_percent,
            female_percent,
        }
    }

    pub fn display(&self) -> String {
        match self {
            GenderRatio::Genderless => "Genderless".to_string(),
            GenderRatio::Ratio {
                male_percent,
                female_percent,
            } => format!("♂ {:.1}% / ♀ {:.1}%", male_percent, female_percent),
        }
    }
}

pub fn compute_gender_ratio(species: &SpeciesRecord) -> GenderRatio {
    GenderRatio::from_rate(species.gender_rate)
}

pub fn capture_rate(species: &SpeciesRecord) -> Option<u32> {
    species.capture_rate
}

pub fn base_happiness(species: &SpeciesRecord) -> Option<u32> {
    species.base_happiness
}

pub fn height_m(pokemon: &PokemonRecord) -> Option<f64> {
    pokemon.height.map(|dm| dm as f64 / 10.0)
}

pub fn weight_kg(pokemon: &PokemonRecord) -> Option<f64> {
    pokemon.weight.map(|hg| hg as f64 / 10.0)
}

/// `"mr-mime"` -> `"Mr Mime"`
pub fn title_case(slug: &str) -> String {
    slug.split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("mr-mime"), "Mr Mime");
        assert_eq!(title_case("pikachu"), "Pikachu");
        assert_eq!(title_case("charizard-mega-x"), "Charizard Mega X");
    }

    #[test]
    fn test_gender_display() {
        assert_eq!(GenderRatio::from_rate(1).display(), "♂ 87.5% / ♀ 12.5%");
        assert_eq!(GenderRatio::from_rate(-1).display(), "Genderless");
    }

    #[test]
    fn test_abilities_display() {
        let abilities = Abilities {
            normal: vec!["blaze".to_string()],
            hidden: Some("solar-power".to_string()),
        };
        assert_eq!(abilities.display(), "blaze | solar-power (Hidden)");
    }
}
