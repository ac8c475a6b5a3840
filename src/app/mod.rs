pub mod routes;
pub mod server;

pub use routes::{build_router, AppState};
pub use server::{build_app, build_service, serve, serve_on};
