use crate::domain::model::{PokemonResource, RawSpeciesData, ResourceKind};
use crate::domain::ports::SpeciesDataClient;
use crate::utils::error::{PokedexError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub const DEFAULT_POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// PokeAPI v2 client
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url("pokeapi_url", base_url)?,
        })
    }

    /// 組出 `{base}/{kind}/{name}`，名稱會轉成小寫並做 URL 編碼
    fn resource_url(&self, kind: ResourceKind, name: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PokedexError::ConfigError {
                message: format!("PokeAPI URL cannot be a base: {}", self.base_url),
            })?
            .pop_if_empty()
            .push(kind.path_segment())
            .push(&name.trim().to_lowercase());
        Ok(url)
    }

    async fn get_resource<T: DeserializeOwned>(&self, kind: ResourceKind, name: &str) -> Result<T> {
        let url = self.resource_url(kind, name)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound {
                kind: kind.to_string(),
                name: name.to_string(),
            });
        }

        if !status.is_success() {
            return Err(PokedexError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SpeciesDataClient for PokeApiClient {
    async fn fetch_pokemon(&self, name: &str) -> Result<PokemonResource> {
        self.get_resource(ResourceKind::Pokemon, name).await
    }

    async fn fetch_species(&self, name: &str) -> Result<RawSpeciesData> {
        self.get_resource(ResourceKind::PokemonSpecies, name).await
    }
}

pub(crate) fn parse_base_url(field_name: &str, base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url).map_err(|e| PokedexError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    if url.cannot_be_a_base() {
        return Err(PokedexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: base_url.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }

    Ok(url)
}
