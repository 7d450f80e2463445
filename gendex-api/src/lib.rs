pub mod async_util;
pub mod catalog;
pub mod client;
pub mod encounters;
pub mod error;
pub mod filter;
pub mod format;
pub mod roster;
pub mod session;
pub mod settings;
pub mod types;

pub use catalog::GenerationDescriptor;
pub use client::{DEFAULT_BASE_URL, PokeApiClient};
pub use encounters::{EncounterGroup, EncounterSlot, VersionGroup, resolve_encounters};
pub use error::ApiError;
pub use filter::filter_roster;
pub use roster::{
    DetailSource, PokemonSummary, RosterEvent, aggregate_details, fetch_species_list, load_roster,
    species_id_by_name, species_id_from_url,
};
pub use session::{BrowseSession, LoadToken, ViewState};
pub use settings::{SettingSource, SettingSources, Settings, setting_sources, settings_path};
