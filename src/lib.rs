pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{FunTranslationsClient, PokeApiClient};
pub use app::{build_app, build_router, serve, AppState};
pub use core::service::PokemonInformationService;
pub use domain::model::{PokemonRecord, Tone};
pub use domain::ports::InformationService;
pub use utils::error::{PokedexError, Result};
