// Adapters layer: concrete implementations of the domain ports for external HTTP APIs.

pub mod fun_translations;
pub mod poke_api;

pub use fun_translations::FunTranslationsClient;
pub use poke_api::PokeApiClient;
