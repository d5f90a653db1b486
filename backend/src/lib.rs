pub mod catchers;
pub mod config;
pub mod error;
pub mod routes;
pub mod store;
pub mod telemetry;
pub mod utils;
pub use shared::{models::*, error::*};

use rocket::{catchers, figment::Figment, Build, Rocket};
use crate::{
    catchers::{bad_request, internal_error, not_found},
    config::ServiceConfig,
    routes::{api_routes, AppState},
};

/// Assembles the server: one empty store per resource, the `/api` routes
/// and the JSON catchers.
pub fn build(figment: Figment, config: &ServiceConfig) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(AppState::new(config.strict_ids))
        .mount("/api", api_routes())
        .register(
            "/",
            catchers![bad_request, not_found, internal_error],
        )
}
