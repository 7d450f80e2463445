use serde::Deserialize;

/// A name + URL reference, the building block of most PokéAPI payloads.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Response from `generation/{id}/`. Only the species list is consumed;
/// the endpoint also carries moves, types and region data we ignore.
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub pokemon_species: Vec<NamedResource>,
}

/// Response from `pokemon/{id}/`, trimmed to the fields the roster needs.
#[derive(Debug, Deserialize, Clone)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: SpriteSet,
}

/// Sprite URLs for a Pokémon. Every field can be absent or null upstream.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SpriteSet {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl SpriteSet {
    /// Pick the best available front sprite: the default game sprite,
    /// falling back to the official artwork, or `None` when neither exists.
    pub fn best_front(&self) -> Option<&str> {
        self.front_default
            .as_deref()
            .or_else(|| {
                self.other
                    .as_ref()
                    .and_then(|o| o.official_artwork.as_ref())
                    .and_then(|a| a.front_default.as_deref())
            })
    }
}

/// One element of the `pokemon/{id}/encounters` array: a location area
/// with per-version encounter details.
#[derive(Debug, Deserialize, Clone)]
pub struct LocationAreaEncounter {
    pub location_area: NamedResource,
    #[serde(default)]
    pub version_details: Vec<VersionEncounterDetail>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VersionEncounterDetail {
    pub version: NamedResource,
    #[serde(default)]
    pub encounter_details: Vec<EncounterDetail>,
}

/// A single encounter slot: method, chance percentage and level range.
#[derive(Debug, Deserialize, Clone)]
pub struct EncounterDetail {
    pub method: NamedResource,
    #[serde(default)]
    pub chance: u8,
    #[serde(default)]
    pub min_level: u8,
    #[serde(default)]
    pub max_level: u8,
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
