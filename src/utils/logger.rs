use crate::domain::events::ServiceEvent;
use crate::domain::ports::DiagnosticSink;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pokedex_api=debug,tower_http=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokedex_api=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokedex_api=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // 容器環境使用 JSON 格式方便收集
        )
        .init();
}

/// Forwards service events to `tracing` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, event: ServiceEvent) {
        match event {
            ServiceEvent::PokemonNotFound { name, reason } => {
                tracing::info!(pokemon = %name, %reason, "Pokemon not found");
            }
            ServiceEvent::SpeciesUnavailable {
                name,
                species,
                reason,
            } => {
                tracing::error!(pokemon = %name, %species, %reason, "Error building Pokémon information");
            }
            ServiceEvent::TranslationSkipped { name } => {
                tracing::info!(pokemon = %name, "No description to translate");
            }
            ServiceEvent::TranslationFailed { name, tone, reason } => {
                tracing::error!(
                    pokemon = %name,
                    %tone,
                    %reason,
                    "Translation API failed. Returning standard description"
                );
            }
            ServiceEvent::UnexpectedFailure { name, reason } => {
                tracing::error!(pokemon = %name, %reason, "An error occurred while getting Pokémon");
            }
            ServiceEvent::DescriptionTranslated { name, tone } => {
                tracing::debug!(pokemon = %name, %tone, "Description translated");
            }
        }
    }
}

/// Keeps every emitted event in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<ServiceEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ServiceEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, event: ServiceEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}
