pub mod assembler;
pub mod selector;
pub mod service;

pub use crate::domain::events::ServiceEvent;
pub use crate::domain::model::{PokemonRecord, PokemonResource, RawSpeciesData, Tone};
pub use crate::domain::ports::{
    DiagnosticSink, InformationService, SpeciesDataClient, TranslationClient,
};
pub use crate::utils::error::Result;
