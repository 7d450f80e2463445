//! In-memory browse-session state.
//!
//! One `BrowseSession` owns the current generation, roster, filter query
//! and selection for a frontend. It is single-writer: every mutation goes
//! through a method here, and async roster loads re-enter through
//! `install_roster`, which rejects results from superseded loads.

use crate::catalog::{self, GenerationDescriptor};
use crate::error::ApiError;
use crate::filter::filter_roster;
use crate::roster::PokemonSummary;

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    GenerationMenu,
    PokemonList,
    PokemonDetails,
}

/// Handle for one roster load. Only the most recently issued token may
/// install its result; an older token's payload is discarded, so
/// overlapping loads resolve last-write-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Navigation and data state for one browsing session.
pub struct BrowseSession {
    view: ViewState,
    generation: Option<&'static GenerationDescriptor>,
    roster: Vec<PokemonSummary>,
    query: String,
    selected: Option<u32>,
    load_seq: u64,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self {
            view: ViewState::GenerationMenu,
            generation: None,
            roster: Vec::new(),
            query: String::new(),
            selected: None,
            load_seq: 0,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// The active generation, if one has been selected this session.
    pub fn generation(&self) -> Option<&'static GenerationDescriptor> {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The full roster, regardless of the current filter query.
    pub fn roster(&self) -> &[PokemonSummary] {
        &self.roster
    }

    /// Begin loading a generation.
    ///
    /// Validates the key, clears the previous roster/query/selection,
    /// moves to the list view, and returns the descriptor plus the token
    /// the load must present to `install_roster`. Issuing a new token
    /// supersedes any load still in flight.
    pub fn select_generation(
        &mut self,
        key: u8,
    ) -> Result<(&'static GenerationDescriptor, LoadToken), ApiError> {
        let descriptor = catalog::describe(key)?;
        self.generation = Some(descriptor);
        self.roster.clear();
        self.query.clear();
        self.selected = None;
        self.view = ViewState::PokemonList;
        self.load_seq += 1;
        Ok((descriptor, LoadToken(self.load_seq)))
    }

    /// Install a finished roster load.
    ///
    /// Returns false (and drops the payload) when the token is stale,
    /// i.e. another `select_generation` happened after this load began.
    pub fn install_roster(&mut self, token: LoadToken, roster: Vec<PokemonSummary>) -> bool {
        if token.0 != self.load_seq {
            log::debug!(
                "Discarding stale roster load (token {} != current {})",
                token.0,
                self.load_seq
            );
            return false;
        }
        self.roster = roster;
        true
    }

    /// Update the free-text filter query.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// The roster entries matching the current query, in roster order.
    pub fn visible(&self) -> Vec<&PokemonSummary> {
        filter_roster(&self.roster, &self.query)
    }

    /// Select a roster entry by id and move to the details view.
    ///
    /// Only legal from the list view; returns `None` (and stays put) for
    /// an id not in the roster or from any other view.
    pub fn select_species(&mut self, id: u32) -> Option<&PokemonSummary> {
        if self.view != ViewState::PokemonList {
            return None;
        }
        let entry = self.roster.iter().find(|p| p.id == id)?;
        self.selected = Some(id);
        self.view = ViewState::PokemonDetails;
        Some(entry)
    }

    /// The entry the details view is showing.
    pub fn selected(&self) -> Option<&PokemonSummary> {
        let id = self.selected?;
        self.roster.iter().find(|p| p.id == id)
    }

    /// Go back one screen: details -> list -> menu.
    ///
    /// The roster survives returning to the menu; it is replaced only by
    /// the next `select_generation`. In-flight loads are not cancelled.
    pub fn back(&mut self) {
        match self.view {
            ViewState::PokemonDetails => {
                self.selected = None;
                self.view = ViewState::PokemonList;
            }
            ViewState::PokemonList => {
                self.view = ViewState::GenerationMenu;
            }
            ViewState::GenerationMenu => {}
        }
    }
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
