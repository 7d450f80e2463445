//! Free-text roster filtering.

use crate::roster::PokemonSummary;

/// Select the roster entries matching a free-text query.
///
/// A summary matches when its name contains the query case-insensitively,
/// or the decimal string of its id contains the query ("5" matches 5, 15,
/// 25, 52). The empty query matches everything. Order is preserved; no
/// allocation beyond the result vector.
pub fn filter_roster<'a>(roster: &'a [PokemonSummary], query: &str) -> Vec<&'a PokemonSummary> {
    if query.is_empty() {
        return roster.iter().collect();
    }
    let needle = query.to_lowercase();
    roster
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle) || p.id.to_string().contains(&needle))
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
