use crate::domain::events::ServiceEvent;
use crate::domain::model::{PokemonRecord, PokemonResource, RawSpeciesData, Tone};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Species data source (PokeAPI).
#[async_trait]
pub trait SpeciesDataClient: Send + Sync {
    async fn fetch_pokemon(&self, name: &str) -> Result<PokemonResource>;
    async fn fetch_species(&self, name: &str) -> Result<RawSpeciesData>;
}

/// Tone-parameterized text translation.
///
/// Provider failures must be reported as `PokedexError::TranslationError`;
/// the service only falls back to the untranslated record for that variant.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    async fn translate(&self, text: &str, tone: Tone) -> Result<String>;
}

pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, event: ServiceEvent);
}

/// Entry points used by the HTTP layer. `None` means not found.
#[async_trait]
pub trait InformationService: Send + Sync {
    async fn get_by_name(&self, name: &str) -> Option<PokemonRecord>;
    async fn get_with_translated_description(&self, name: &str) -> Option<PokemonRecord>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn pokeapi_url(&self) -> &str;
    fn translation_url(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
}
