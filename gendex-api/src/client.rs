use tokio::time::Duration;

use crate::error::ApiError;
use crate::types::{GenerationResponse, LocationAreaEncounter, PokemonResponse};

/// Public PokéAPI v2 root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the PokéAPI. Read-only, no authentication.
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client against the public API.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API root (mirrors, local fixtures).
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("gendex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a generation's species list from `generation/{id}/`.
    pub async fn generation(&self, api_id: u32) -> Result<GenerationResponse, ApiError> {
        self.get_json(&format!("generation/{}/", api_id)).await
    }

    /// Fetch one Pokémon's detail record from `pokemon/{id}/`.
    pub async fn pokemon(&self, id: u32) -> Result<PokemonResponse, ApiError> {
        self.get_json(&format!("pokemon/{}/", id)).await
    }

    /// Fetch a Pokémon's wild-encounter list from `pokemon/{id}/encounters`.
    pub async fn encounters(&self, id: u32) -> Result<Vec<LocationAreaEncounter>, ApiError> {
        self.get_json(&format!("pokemon/{}/encounters", id)).await
    }

    /// GET a path under the API root and decode the JSON body.
    ///
    /// The body is read as text first so a malformed payload surfaces as
    /// `Decode` instead of disappearing into the transport error.
    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("GET {}", url);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
