use super::*;

#[test]
fn test_decode_generation_response() {
    let json = r#"{
        "id": 1,
        "name": "generation-i",
        "pokemon_species": [
            {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"},
            {"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon-species/4/"}
        ]
    }"#;
    let resp: GenerationResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.pokemon_species.len(), 2);
    assert_eq!(resp.pokemon_species[0].name, "bulbasaur");
    assert_eq!(
        resp.pokemon_species[1].url,
        "https://pokeapi.co/api/v2/pokemon-species/4/"
    );
}

#[test]
fn test_decode_generation_response_without_species_list() {
    let resp: GenerationResponse = serde_json::from_str(r#"{"id": 1}"#).unwrap();
    assert!(resp.pokemon_species.is_empty());
}

#[test]
fn test_decode_pokemon_response() {
    let json = r#"{
        "id": 25,
        "name": "pikachu",
        "sprites": {
            "front_default": "https://example.test/sprites/25.png",
            "back_default": "https://example.test/sprites/back/25.png",
            "other": {
                "dream_world": {"front_default": null},
                "official-artwork": {
                    "front_default": "https://example.test/artwork/25.png"
                }
            }
        }
    }"#;
    let resp: PokemonResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.id, 25);
    assert_eq!(resp.name, "pikachu");
    assert_eq!(
        resp.sprites.best_front(),
        Some("https://example.test/sprites/25.png")
    );
}

#[test]
fn test_sprite_fallback_uses_artwork_when_default_null() {
    let json = r#"{
        "id": 10184,
        "name": "some-form",
        "sprites": {
            "front_default": null,
            "other": {
                "official-artwork": {
                    "front_default": "https://example.test/artwork/10184.png"
                }
            }
        }
    }"#;
    let resp: PokemonResponse = serde_json::from_str(json).unwrap();
    assert_eq!(
        resp.sprites.best_front(),
        Some("https://example.test/artwork/10184.png")
    );
}

#[test]
fn test_sprite_fallback_none_when_both_missing() {
    let sprites = SpriteSet::default();
    assert_eq!(sprites.best_front(), None);

    // Artwork branch present but its URL is null
    let json = r#"{"front_default": null, "other": {"official-artwork": {"front_default": null}}}"#;
    let sprites: SpriteSet = serde_json::from_str(json).unwrap();
    assert_eq!(sprites.best_front(), None);
}

#[test]
fn test_sprite_fallback_prefers_default_over_artwork() {
    let sprites = SpriteSet {
        front_default: Some("default.png".to_string()),
        other: Some(OtherSprites {
            official_artwork: Some(ArtworkSprites {
                front_default: Some("artwork.png".to_string()),
            }),
        }),
    };
    assert_eq!(sprites.best_front(), Some("default.png"));
}

#[test]
fn test_decode_pokemon_without_sprites_object() {
    let resp: PokemonResponse =
        serde_json::from_str(r#"{"id": 1, "name": "bulbasaur"}"#).unwrap();
    assert_eq!(resp.sprites.best_front(), None);
}

#[test]
fn test_decode_encounters_payload() {
    let json = r#"[
        {
            "location_area": {"name": "kanto-route-2-south-towards-viridian-city", "url": "https://example.test/location-area/296/"},
            "version_details": [
                {
                    "version": {"name": "red", "url": "https://example.test/version/1/"},
                    "max_chance": 51,
                    "encounter_details": [
                        {
                            "method": {"name": "walk", "url": "https://example.test/encounter-method/1/"},
                            "chance": 51,
                            "min_level": 3,
                            "max_level": 5,
                            "condition_values": []
                        }
                    ]
                }
            ]
        }
    ]"#;
    let areas: Vec<LocationAreaEncounter> = serde_json::from_str(json).unwrap();
    assert_eq!(areas.len(), 1);
    assert_eq!(
        areas[0].location_area.name,
        "kanto-route-2-south-towards-viridian-city"
    );
    let vd = &areas[0].version_details[0];
    assert_eq!(vd.version.name, "red");
    assert_eq!(vd.encounter_details[0].method.name, "walk");
    assert_eq!(vd.encounter_details[0].chance, 51);
    assert_eq!(vd.encounter_details[0].min_level, 3);
    assert_eq!(vd.encounter_details[0].max_level, 5);
}

#[test]
fn test_decode_malformed_pokemon_is_error() {
    let result: Result<PokemonResponse, _> = serde_json::from_str(r#"{"name": "no-id"}"#);
    assert!(result.is_err());
}
