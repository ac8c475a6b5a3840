use crate::adapters::{FunTranslationsClient, PokeApiClient};
use crate::app::routes::{build_router, AppState};
use crate::core::service::PokemonInformationService;
use crate::domain::ports::{ConfigProvider, InformationService};
use crate::utils::error::{PokedexError, Result};
use crate::utils::validation::validate_socket_addr;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// 依配置建立上游客戶端與資訊服務
pub fn build_service<C: ConfigProvider + ?Sized>(config: &C) -> Result<Arc<dyn InformationService>> {
    let timeout = Duration::from_secs(config.request_timeout_secs());
    let species_client = PokeApiClient::new(config.pokeapi_url(), timeout)?;
    let translation_client = FunTranslationsClient::new(config.translation_url(), timeout)?;

    Ok(Arc::new(PokemonInformationService::new(
        species_client,
        translation_client,
    )))
}

pub fn build_app<C: ConfigProvider + ?Sized>(config: &C) -> Result<Router> {
    Ok(build_router(AppState::new(build_service(config)?)))
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    let addr = validate_socket_addr("bind_address", config.bind_address())?;
    let app = build_app(config)?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| PokedexError::ServerError {
            message: format!("Failed to bind {}: {}", addr, e),
        })?;

    serve_on(listener, app, shutdown_signal()).await
}

pub async fn serve_on<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 Server running at http://{}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| PokedexError::ServerError {
            message: format!("Server error: {}", e),
        })?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
