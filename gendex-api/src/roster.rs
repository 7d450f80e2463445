//! Roster loading: species list fetch plus concurrent detail aggregation.
//!
//! A generation load is two stages. First one request fetches the species
//! list, and that call either succeeds whole or fails whole. Then one
//! detail request per species runs concurrently; a species that fails to
//! resolve is dropped from the roster rather than failing the load.

use futures::stream::{self, StreamExt};
use tokio::sync::mpsc;

use crate::catalog::GenerationDescriptor;
use crate::client::PokeApiClient;
use crate::error::ApiError;
use crate::types::{NamedResource, PokemonResponse};

/// The denormalized record backing one roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonSummary {
    /// Canonical national dex number, unique within a roster.
    pub id: u32,
    /// API species tag, e.g. "pikachu".
    pub name: String,
    /// Best available front sprite URL, when the API has one.
    pub sprite: Option<String>,
    /// The species URL this entry was derived from.
    pub species_url: String,
}

/// Progress events emitted during a roster load, consumed by the CLI.
#[derive(Debug, Clone)]
pub enum RosterEvent {
    /// Species list fetched; this many detail requests will follow.
    ListFetched { total: usize },
    /// One species resolved into a roster entry.
    EntryFetched { id: u32, name: String },
    /// One species failed to resolve (non-fatal, excluded from the roster).
    EntryFailed { species: String, reason: String },
    /// All species processed.
    Done,
}

/// Source of per-species detail records.
///
/// The live implementation is `PokeApiClient`; tests substitute canned data.
#[allow(async_fn_in_trait)]
pub trait DetailSource {
    /// Fetch the detail record for one species by its numeric id.
    async fn pokemon_by_id(&self, id: u32) -> Result<PokemonResponse, ApiError>;
}

impl DetailSource for PokeApiClient {
    async fn pokemon_by_id(&self, id: u32) -> Result<PokemonResponse, ApiError> {
        self.pokemon(id).await
    }
}

/// Fetch the species list for a generation.
///
/// One request; a transport or decode failure fails the whole call.
/// The upstream order is preserved (it is not sorted by id).
pub async fn fetch_species_list(
    client: &PokeApiClient,
    descriptor: &GenerationDescriptor,
) -> Result<Vec<NamedResource>, ApiError> {
    let resp = client.generation(descriptor.api_id).await?;
    Ok(resp.pokemon_species)
}

/// Extract the numeric id from a resource URL's trailing path segment.
///
/// `https://pokeapi.co/api/v2/pokemon-species/25/` -> `Some(25)`.
pub fn species_id_from_url(url: &str) -> Option<u32> {
    url.split('/').rev().find(|s| !s.is_empty())?.parse().ok()
}

/// Find a species' numeric id by name within a species list.
pub fn species_id_by_name(species: &[NamedResource], name: &str) -> Option<u32> {
    let lowered = name.to_lowercase();
    species
        .iter()
        .find(|s| s.name == lowered)
        .and_then(|s| species_id_from_url(&s.url))
}

/// Resolve species refs into roster entries, a bounded number at a time.
///
/// Each species becomes one detail request. Failures (and refs without a
/// parseable id) are logged, reported as `EntryFailed`, and excluded; one
/// unreachable species never blocks the rest. The result is sorted
/// ascending by id and de-duplicated, so input order does not matter.
/// Zero successes yield an empty roster, not an error.
pub async fn aggregate_details<S: DetailSource>(
    source: &S,
    species: &[NamedResource],
    max_in_flight: usize,
    events: &mpsc::UnboundedSender<RosterEvent>,
) -> Vec<PokemonSummary> {
    let results: Vec<Option<PokemonSummary>> = stream::iter(species)
        .map(|sp| {
            let events = events.clone();
            async move {
                let Some(id) = species_id_from_url(&sp.url) else {
                    log::warn!("No numeric id in species URL '{}'; skipping {}", sp.url, sp.name);
                    let _ = events.send(RosterEvent::EntryFailed {
                        species: sp.name.clone(),
                        reason: "no numeric id in species URL".to_string(),
                    });
                    return None;
                };

                match source.pokemon_by_id(id).await {
                    Ok(detail) => {
                        let summary = PokemonSummary {
                            id: detail.id,
                            name: detail.name,
                            sprite: detail.sprites.best_front().map(|s| s.to_string()),
                            species_url: sp.url.clone(),
                        };
                        let _ = events.send(RosterEvent::EntryFetched {
                            id: summary.id,
                            name: summary.name.clone(),
                        });
                        Some(summary)
                    }
                    Err(e) => {
                        log::warn!("Failed to fetch details for {}: {}", sp.name, e);
                        let _ = events.send(RosterEvent::EntryFailed {
                            species: sp.name.clone(),
                            reason: e.to_string(),
                        });
                        None
                    }
                }
            }
        })
        .buffer_unordered(max_in_flight.max(1))
        .collect()
        .await;

    let mut roster: Vec<PokemonSummary> = results.into_iter().flatten().collect();
    roster.sort_by_key(|p| p.id);
    roster.dedup_by_key(|p| p.id);
    roster
}

/// Load the full roster for a generation: species list + detail fan-out.
pub async fn load_roster(
    client: &PokeApiClient,
    descriptor: &GenerationDescriptor,
    max_in_flight: usize,
    events: &mpsc::UnboundedSender<RosterEvent>,
) -> Result<Vec<PokemonSummary>, ApiError> {
    let species = fetch_species_list(client, descriptor).await?;
    let _ = events.send(RosterEvent::ListFetched {
        total: species.len(),
    });

    let roster = aggregate_details(client, &species, max_in_flight, events).await;
    let _ = events.send(RosterEvent::Done);

    Ok(roster)
}

#[cfg(test)]
#[path = "tests/roster_tests.rs"]
mod tests;
