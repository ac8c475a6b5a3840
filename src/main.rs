use clap::Parser;
use pokedex_api::domain::ports::ConfigProvider;
use pokedex_api::utils::{logger, validation::Validate};
use pokedex_api::{serve, CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 有指定 TOML 檔案時以檔案為準
    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let json_logs = cli.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs());
    let verbose = cli.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    if json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting pokedex-api");

    let result = match &file_config {
        Some(config) => run(config).await,
        None => run(&cli).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> pokedex_api::Result<()> {
    config.validate()?;
    tracing::debug!(
        bind_address = config.bind_address(),
        pokeapi_url = config.pokeapi_url(),
        translation_url = config.translation_url(),
        timeout_secs = config.request_timeout_secs(),
        "Configuration loaded"
    );
    serve(config).await
}
