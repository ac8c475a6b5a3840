use crate::core::assembler::assemble;
use crate::core::selector::select_tone;
use crate::core::{
    DiagnosticSink, InformationService, PokemonRecord, ServiceEvent, SpeciesDataClient,
    TranslationClient,
};
use crate::utils::error::PokedexError;
use crate::utils::logger::TracingSink;
use async_trait::async_trait;

/// Combines PokeAPI lookups with the fun-translation fallback policy.
///
/// Upstream failures never leave this type: lookups collapse to `None`
/// and translation failures fall back to the untranslated record. Each
/// outcome is reported to the injected `DiagnosticSink`.
pub struct PokemonInformationService<S, T, D = TracingSink>
where
    S: SpeciesDataClient,
    T: TranslationClient,
    D: DiagnosticSink,
{
    species_client: S,
    translation_client: T,
    sink: D,
}

impl<S: SpeciesDataClient, T: TranslationClient> PokemonInformationService<S, T, TracingSink> {
    pub fn new(species_client: S, translation_client: T) -> Self {
        Self::with_sink(species_client, translation_client, TracingSink)
    }
}

impl<S, T, D> PokemonInformationService<S, T, D>
where
    S: SpeciesDataClient,
    T: TranslationClient,
    D: DiagnosticSink,
{
    pub fn with_sink(species_client: S, translation_client: T, sink: D) -> Self {
        Self {
            species_client,
            translation_client,
            sink,
        }
    }

    /// 取得寶可夢基本資料；任何一步失敗都視為找不到
    async fn build_record(&self, name: &str) -> Option<PokemonRecord> {
        let pokemon = match self.species_client.fetch_pokemon(name).await {
            Ok(pokemon) => pokemon,
            Err(e) => {
                self.sink.emit(ServiceEvent::PokemonNotFound {
                    name: name.to_string(),
                    reason: e.to_string(),
                });
                return None;
            }
        };

        let Some(canonical_name) = pokemon.name.filter(|n| !n.trim().is_empty()) else {
            self.sink.emit(ServiceEvent::PokemonNotFound {
                name: name.to_string(),
                reason: "upstream resource has no name".to_string(),
            });
            return None;
        };

        match self.species_client.fetch_species(&pokemon.species.name).await {
            Ok(species) => Some(assemble(&canonical_name, &species)),
            Err(e) => {
                self.sink.emit(ServiceEvent::SpeciesUnavailable {
                    name: name.to_string(),
                    species: pokemon.species.name.clone(),
                    reason: e.to_string(),
                });
                None
            }
        }
    }

    async fn translate_record(&self, name: &str, record: PokemonRecord) -> Option<PokemonRecord> {
        let tone = select_tone(&record);

        let Some(description) = record.description.clone() else {
            self.sink.emit(ServiceEvent::TranslationSkipped {
                name: name.to_string(),
            });
            return Some(record);
        };

        match self.translation_client.translate(&description, tone).await {
            Ok(translated) => {
                self.sink.emit(ServiceEvent::DescriptionTranslated {
                    name: name.to_string(),
                    tone,
                });
                Some(record.with_description(translated))
            }
            Err(PokedexError::TranslationError { message }) => {
                self.sink.emit(ServiceEvent::TranslationFailed {
                    name: name.to_string(),
                    tone,
                    reason: message,
                });
                Some(record)
            }
            Err(e) => {
                self.sink.emit(ServiceEvent::UnexpectedFailure {
                    name: name.to_string(),
                    reason: e.to_string(),
                });
                None
            }
        }
    }
}

#[async_trait]
impl<S, T, D> InformationService for PokemonInformationService<S, T, D>
where
    S: SpeciesDataClient,
    T: TranslationClient,
    D: DiagnosticSink,
{
    async fn get_by_name(&self, name: &str) -> Option<PokemonRecord> {
        self.build_record(name).await
    }

    async fn get_with_translated_description(&self, name: &str) -> Option<PokemonRecord> {
        let record = self.build_record(name).await?;
        self.translate_record(name, record).await
    }
}
