//! Sprite, icon and cry URLs.
//!
//! URLs are templated from ids; nothing here fetches or validates them.

use crate::data::records::PokemonRecord;

const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites";

pub fn sprite_url(id: u32) -> String {
    format!("{}/pokemon/{}.png", SPRITE_BASE, id)
}

pub fn showdown_gif_url(id: u32) -> String {
    format!("{}/pokemon/other/showdown/{}.gif", SPRITE_BASE, id)
}

pub fn type_id(type_name: &str) -> u32 {
    match type_name {
        "normal" => 1,
        "fighting" => 2,
        "flying" => 3,
        "poison" => 4,
        "ground" => 5,
        "rock" => 6,
        "bug" => 7,
        "ghost" => 8,
        "steel" => 9,
        "fire" => 10,
        "water" => 11,
        "grass" => 12,
        "electric" => 13,
        "psychic" => 14,
        "ice" => 15,
        "dragon" => 16,
        "dark" => 17,
        "fairy" => 18,
        _ => 1,
    }
}

pub fn type_icon_url(type_name: &str) -> String {
    format!(
        "{}/types/generation-viii/sword-shield/{}.png",
        SPRITE_BASE,
        type_id(type_name)
    )
}

/// Official artwork, falling back to the plain front sprite.
pub fn detail_sprite(pokemon: &PokemonRecord, shiny: bool) -> Option<String> {
    let sprites = &pokemon.sprites;
    let artwork = &sprites.other.official_artwork;
    if shiny {
        artwork.front_shiny.clone().or_else(|| sprites.front_shiny.clone())
    } else {
        artwork.front_default.clone().or_else(|| sprites.front_default.clone())
    }
}

/// Animated showdown sprite, then official artwork, then the front sprite.
pub fn battle_sprite(pokemon: &PokemonRecord) -> Option<String> {
    let sprites = &pokemon.sprites;
    sprites
        .other
        .showdown
        .front_default
        .clone()
        .or_else(|| sprites.other.official_artwork.front_default.clone())
        .or_else(|| sprites.front_default.clone())
}

pub fn latest_cry(pokemon: &PokemonRecord) -> Option<String> {
    pokemon.cries.as_ref().and_then(|c| c.latest.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(sprites: serde_json::Value) -> PokemonRecord {
        serde_json::from_value(json!({
            "id": 6,
            "name": "charizard",
            "species": { "name": "charizard", "url": "" },
            "sprites": sprites
        }))
        .unwrap()
    }

    #[test]
    fn test_urls() {
        assert!(sprite_url(25).ends_with("/sprites/pokemon/25.png"));
        assert!(showdown_gif_url(25).ends_with("/other/showdown/25.gif"));
        assert!(type_icon_url("fire").ends_with("/sword-shield/10.png"));
        assert!(type_icon_url("stellar").ends_with("/sword-shield/1.png"));
    }

    #[test]
    fn test_shiny_falls_back_to_front_sprite() {
        let pokemon = record(json!({
            "front_default": "front.png",
            "front_shiny": "front_shiny.png",
            "other": { "official-artwork": { "front_default": "art.png", "front_shiny": null } }
        }));
        assert_eq!(detail_sprite(&pokemon, false).as_deref(), Some("art.png"));
        assert_eq!(detail_sprite(&pokemon, true).as_deref(), Some("front_shiny.png"));
    }

    #[test]
    fn test_shiny_prefers_shiny_artwork() {
        let pokemon = record(json!({
            "front_default": "front.png",
            "front_shiny": "front_shiny.png",
            "other": { "official-artwork": { "front_default": "art.png", "front_shiny": "art_shiny.png" } }
        }));
        assert_eq!(detail_sprite(&pokemon, true).as_deref(), Some("art_shiny.png"));

        let bare = record(json!({ "front_default": "front.png" }));
        assert_eq!(detail_sprite(&bare, true), None);
    }

    #[test]
    fn test_battle_sprite_chain() {
        let pokemon = record(json!({
            "front_default": "front.png",
            "other": {
                "showdown": { "front_default": null },
                "official-artwork": { "front_default": "art.png" }
            }
        }));
        assert_eq!(battle_sprite(&pokemon).as_deref(), Some("art.png"));

        let bare = record(json!({ "front_default": "front.png" }));
        assert_eq!(battle_sprite(&bare).as_deref(), Some("front.png"));
    }
}
