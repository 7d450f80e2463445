pub(crate) mod browse;
pub(crate) mod config;
pub(crate) mod generations;
pub(crate) mod locations;
pub(crate) mod roster;

use gendex_api::{PokeApiClient, Settings};

use crate::CliError;

/// Build the API client from the effective settings.
pub(crate) fn make_client(settings: &Settings) -> Result<PokeApiClient, CliError> {
    Ok(PokeApiClient::with_base_url(&settings.api_url)?)
}
