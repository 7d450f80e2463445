//! Wild-encounter resolution, cross-filtered by generation.

use crate::catalog::GenerationDescriptor;
use crate::client::PokeApiClient;
use crate::error::ApiError;
use crate::types::LocationAreaEncounter;

/// Encounters at one location area, restricted to a generation's versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterGroup {
    /// Location-area tag, e.g. "viridian-forest-area".
    pub location_area: String,
    /// Per-version encounter slots. Never empty in a filtered result.
    pub versions: Vec<VersionGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGroup {
    /// Version tag, e.g. "yellow".
    pub version: String,
    pub encounters: Vec<EncounterSlot>,
}

/// One encounter slot: method tag, chance percentage and level range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterSlot {
    pub method: String,
    pub chance: u8,
    pub min_level: u8,
    pub max_level: u8,
}

/// Fetch and filter a species' wild encounters for one generation.
///
/// One request; transport and decode failures are terminal for the call.
/// An empty result is a valid outcome: the species has no wild encounters
/// in any of the generation's versions.
pub async fn resolve_encounters(
    client: &PokeApiClient,
    species_id: u32,
    descriptor: &GenerationDescriptor,
) -> Result<Vec<EncounterGroup>, ApiError> {
    let raw = client.encounters(species_id).await?;
    log::debug!(
        "Species {}: {} location areas before filtering for generation {}",
        species_id,
        raw.len(),
        descriptor.key
    );
    Ok(filter_by_generation(raw, descriptor))
}

/// Keep only the version details belonging to the generation.
///
/// A location area whose version details all fall outside the generation
/// is dropped entirely. Relative order of areas, of versions within an
/// area, and of slots within a version is preserved from the API.
pub fn filter_by_generation(
    raw: Vec<LocationAreaEncounter>,
    descriptor: &GenerationDescriptor,
) -> Vec<EncounterGroup> {
    raw.into_iter()
        .filter_map(|area| {
            let versions: Vec<VersionGroup> = area
                .version_details
                .into_iter()
                .filter(|vd| descriptor.has_version(&vd.version.name))
                .map(|vd| VersionGroup {
                    version: vd.version.name,
                    encounters: vd
                        .encounter_details
                        .into_iter()
                        .map(|d| EncounterSlot {
                            method: d.method.name,
                            chance: d.chance,
                            min_level: d.min_level,
                            max_level: d.max_level,
                        })
                        .collect(),
                })
                .collect();

            if versions.is_empty() {
                None
            } else {
                Some(EncounterGroup {
                    location_area: area.location_area.name,
                    versions,
                })
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/encounters_tests.rs"]
mod tests;
