use super::*;

use std::collections::HashSet;

use crate::types::SpriteSet;

/// Canned detail source: resolves any id, failing the ones listed.
struct StubSource {
    fail: HashSet<u32>,
    sprite: Option<String>,
}

impl StubSource {
    fn new() -> Self {
        Self {
            fail: HashSet::new(),
            sprite: None,
        }
    }

    fn failing(ids: &[u32]) -> Self {
        Self {
            fail: ids.iter().copied().collect(),
            sprite: None,
        }
    }

    fn with_sprite(sprite: &str) -> Self {
        Self {
            fail: HashSet::new(),
            sprite: Some(sprite.to_string()),
        }
    }
}

impl DetailSource for StubSource {
    async fn pokemon_by_id(&self, id: u32) -> Result<PokemonResponse, ApiError> {
        if self.fail.contains(&id) {
            return Err(ApiError::Status {
                status: 500,
                url: format!("stub://pokemon/{}", id),
            });
        }
        Ok(PokemonResponse {
            id,
            name: format!("species-{}", id),
            sprites: SpriteSet {
                front_default: self.sprite.clone(),
                other: None,
            },
        })
    }
}

fn refs(ids: &[u32]) -> Vec<NamedResource> {
    ids.iter()
        .map(|id| NamedResource {
            name: format!("species-{}", id),
            url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id),
        })
        .collect()
}

#[test]
fn test_species_id_from_url() {
    assert_eq!(
        species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/25/"),
        Some(25)
    );
    assert_eq!(
        species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/25"),
        Some(25)
    );
    assert_eq!(species_id_from_url("25"), Some(25));
    assert_eq!(species_id_from_url(""), None);
    assert_eq!(species_id_from_url("https://pokeapi.co/api/v2/"), None);
    assert_eq!(
        species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/abc/"),
        None
    );
}

#[test]
fn test_species_id_by_name() {
    let list = refs(&[1, 4, 7]);
    assert_eq!(species_id_by_name(&list, "species-4"), Some(4));
    assert_eq!(species_id_by_name(&list, "SPECIES-4"), Some(4));
    assert_eq!(species_id_by_name(&list, "species-9"), None);
}

#[tokio::test]
async fn test_aggregate_sorts_ascending() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let roster = aggregate_details(&StubSource::new(), &refs(&[7, 1, 4]), 2, &tx).await;
    let ids: Vec<u32> = roster.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 4, 7]);
}

#[tokio::test]
async fn test_aggregate_order_independent() {
    let (tx_a, _rx_a) = mpsc::unbounded_channel();
    let (tx_b, _rx_b) = mpsc::unbounded_channel();
    let source = StubSource::new();
    let forward = aggregate_details(&source, &refs(&[1, 2, 3, 4]), 2, &tx_a).await;
    let reversed = aggregate_details(&source, &refs(&[4, 3, 2, 1]), 2, &tx_b).await;
    assert_eq!(forward, reversed);
}

#[tokio::test]
async fn test_one_failure_drops_only_that_entry() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let roster = aggregate_details(&StubSource::failing(&[4]), &refs(&[1, 4, 7]), 3, &tx).await;
    let ids: Vec<u32> = roster.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 7]);
}

#[tokio::test]
async fn test_all_failures_yield_empty_roster() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let roster =
        aggregate_details(&StubSource::failing(&[1, 4, 7]), &refs(&[1, 4, 7]), 3, &tx).await;
    assert!(roster.is_empty());
}

#[tokio::test]
async fn test_unparseable_url_is_skipped() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut species = refs(&[1]);
    species.push(NamedResource {
        name: "mystery".to_string(),
        url: "not-a-resource-url".to_string(),
    });
    let roster = aggregate_details(&StubSource::new(), &species, 2, &tx).await;
    let ids: Vec<u32> = roster.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn test_duplicate_ids_deduped() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let roster = aggregate_details(&StubSource::new(), &refs(&[25, 25, 3]), 2, &tx).await;
    let ids: Vec<u32> = roster.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 25]);
}

#[tokio::test]
async fn test_sprite_carried_into_summary() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let roster = aggregate_details(
        &StubSource::with_sprite("https://example.test/sprite.png"),
        &refs(&[1]),
        1,
        &tx,
    )
    .await;
    assert_eq!(
        roster[0].sprite.as_deref(),
        Some("https://example.test/sprite.png")
    );
}

#[tokio::test]
async fn test_events_report_each_entry() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let roster = aggregate_details(&StubSource::failing(&[4]), &refs(&[1, 4, 7]), 3, &tx).await;
    assert_eq!(roster.len(), 2);
    drop(tx);

    let mut fetched = 0;
    let mut failed = 0;
    while let Some(event) = rx.recv().await {
        match event {
            RosterEvent::EntryFetched { .. } => fetched += 1,
            RosterEvent::EntryFailed { species, .. } => {
                assert_eq!(species, "species-4");
                failed += 1;
            }
            _ => {}
        }
    }
    assert_eq!(fetched, 2);
    assert_eq!(failed, 1);
}

#[tokio::test]
async fn test_empty_species_list_yields_empty_roster() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let roster = aggregate_details(&StubSource::new(), &[], 4, &tx).await;
    assert!(roster.is_empty());
}
