use crate::adapters::fun_translations::DEFAULT_TRANSLATION_URL;
use crate::adapters::poke_api::DEFAULT_POKEAPI_URL;
use crate::core::Result;
use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{validate_provider, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pokedex-api")]
#[command(about = "Pokémon information API with fun translations")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:5000")]
    pub bind_address: String,

    #[arg(long, default_value = DEFAULT_POKEAPI_URL)]
    pub pokeapi_url: String,

    #[arg(long, default_value = DEFAULT_TRANSLATION_URL)]
    pub translation_url: String,

    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn pokeapi_url(&self) -> &str {
        &self.pokeapi_url
    }

    fn translation_url(&self) -> &str {
        &self.translation_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
