//! Book inventory HTTP server.
//!
//! Builds the store and service once at startup, then serves the REST
//! surface until shutdown. Configuration comes from TOML (see `config`).

use actix_web::{middleware, web, App, HttpServer};

mod api;
mod config;
mod error;

use error::ServerError;

async fn inner_main() -> Result<(), ServerError> {
    let config = config::load()?;
    bookstock_core::init_logging(&config.log_level, config.log_dir.as_deref())
        .map_err(ServerError::Logging)?;

    // The one store instance for the process lifetime; handlers receive
    // it by handle, never through ambient globals.
    let state = web::Data::new(api::AppState::new());

    log::info!(
        "event=server_start module=server status=ok bind={} workers={} version={}",
        config.bind,
        config.workers,
        env!("CARGO_PKG_VERSION")
    );

    let cors_origin = config.cors_allowed_origin.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Condition::new(
                cors_origin.is_some(),
                cors_headers(cors_origin.as_deref().unwrap_or_default()),
            ))
            .app_data(state.clone())
            .configure(api::configure)
    })
    .workers(config.workers)
    .bind(&config.bind)
    .map_err(|source| ServerError::Io {
        context: format!("Failed to bind {}", config.bind),
        source,
    })?;

    server.run().await.map_err(|source| ServerError::Io {
        context: "Failed to run server".to_string(),
        source,
    })
}

/// Cross-origin response headers matching the deployed front end's
/// expectations; attached only when an origin is configured.
fn cors_headers(origin: &str) -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", origin))
        .add((
            "Access-Control-Allow-Headers",
            "Origin, X-Requested-With, Content-Type, Accept",
        ))
        .add(("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    inner_main().await.map_err(std::io::Error::other)
}
