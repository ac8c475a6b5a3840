use crate::domain::ports::InformationService;
use crate::utils::validation::validate_non_empty_string;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub const NAME_REQUIRED_MESSAGE: &str = "Pokemon name is required.";
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn InformationService>,
}

impl AppState {
    pub fn new(service: Arc<dyn InformationService>) -> Self {
        Self { service }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/pokemon/", get(missing_name))
        .route("/api/v1/pokemon/translated/", get(missing_name))
        .route("/api/v1/pokemon/{name}", get(get_pokemon))
        .route(
            "/api/v1/pokemon/translated/{name}",
            get(get_translated_pokemon),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_pokemon(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let name = match require_name(&name) {
        Ok(name) => name,
        Err(response) => return response,
    };

    match state.service.get_by_name(name).await {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn get_translated_pokemon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let name = match require_name(&name) {
        Ok(name) => name,
        Err(response) => return response,
    };

    match state.service.get_with_translated_description(name).await {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

// An empty path segment never reaches the `{name}` routes.
async fn missing_name() -> Response {
    tracing::debug!("Rejected request: empty name segment");
    name_required()
}

fn name_required() -> Response {
    (StatusCode::BAD_REQUEST, Json(NAME_REQUIRED_MESSAGE)).into_response()
}

fn require_name(name: &str) -> std::result::Result<&str, Response> {
    if let Err(e) = validate_non_empty_string("name", name) {
        tracing::debug!("Rejected request: {}", e);
        return Err(name_required());
    }
    Ok(name.trim())
}

/// Last-resort handler: a panic in the service becomes a generic 500.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "An error occurred while retrieving pokemon");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(INTERNAL_SERVER_ERROR_MESSAGE),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PokemonRecord;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubService {
        panic_on_lookup: bool,
        requested: Mutex<Vec<String>>,
    }

    fn pikachu(description: &str) -> PokemonRecord {
        PokemonRecord {
            name: "pikachu".to_string(),
            description: Some(description.to_string()),
            habitat: Some("forest".to_string()),
            is_legendary: false,
        }
    }

    #[async_trait]
    impl InformationService for StubService {
        async fn get_by_name(&self, name: &str) -> Option<PokemonRecord> {
            if self.panic_on_lookup {
                panic!("species client exploded");
            }
            self.requested.lock().unwrap().push(name.to_string());
            (name == "pikachu").then(|| pikachu("An electric Pokémon."))
        }

        async fn get_with_translated_description(&self, name: &str) -> Option<PokemonRecord> {
            self.requested.lock().unwrap().push(name.to_string());
            (name == "pikachu").then(|| pikachu("An electric Pokémon, verily."))
        }
    }

    fn app(service: Arc<StubService>) -> Router {
        build_router(AppState::new(service))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_get_pokemon_ok() {
        let (status, body) = get(app(Arc::new(StubService::default())), "/api/v1/pokemon/pikachu").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "pikachu",
                "description": "An electric Pokémon.",
                "habitat": "forest",
                "isLegendary": false
            })
        );
    }

    #[tokio::test]
    async fn test_get_translated_pokemon_ok() {
        let (status, body) = get(
            app(Arc::new(StubService::default())),
            "/api/v1/pokemon/translated/pikachu",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let record: PokemonRecord = serde_json::from_slice(&body).unwrap();
        assert_eq!(record.description.as_deref(), Some("An electric Pokémon, verily."));
    }

    #[tokio::test]
    async fn test_unknown_pokemon_is_404() {
        let service = Arc::new(StubService::default());
        let (status, body) = get(app(service.clone()), "/api/v1/pokemon/nonexistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());

        let (status, _) = get(app(service), "/api/v1/pokemon/translated/nonexistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_whitespace_name_is_400() {
        let service = Arc::new(StubService::default());
        let (status, body) = get(app(service.clone()), "/api/v1/pokemon/%20%20").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message: String = serde_json::from_slice(&body).unwrap();
        assert_eq!(message, NAME_REQUIRED_MESSAGE);

        let (status, _) = get(app(service.clone()), "/api/v1/pokemon/translated/%09").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // 驗證失敗時不應呼叫服務
        assert!(service.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_name_segment_is_400() {
        let service = Arc::new(StubService::default());

        for uri in ["/api/v1/pokemon/", "/api/v1/pokemon/translated/"] {
            let (status, body) = get(app(service.clone()), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
            let message: String = serde_json::from_slice(&body).unwrap();
            assert_eq!(message, NAME_REQUIRED_MESSAGE);
        }

        assert!(service.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_name_is_trimmed_before_lookup() {
        let service = Arc::new(StubService::default());
        let (status, _) = get(app(service.clone()), "/api/v1/pokemon/%20pikachu%20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(*service.requested.lock().unwrap(), vec!["pikachu".to_string()]);
    }

    #[tokio::test]
    async fn test_panic_in_service_is_500() {
        let service = Arc::new(StubService {
            panic_on_lookup: true,
            ..Default::default()
        });
        let (status, body) = get(app(service), "/api/v1/pokemon/pikachu").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message: String = serde_json::from_slice(&body).unwrap();
        assert_eq!(message, INTERNAL_SERVER_ERROR_MESSAGE);
        assert!(!message.contains("exploded"));
    }
}
