#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the sentencing dashboard.
//!
//! The case dataset is loaded and prepared once at startup and shared
//! read-only between workers. Every dashboard request runs one complete
//! filter-aggregate cycle over it; nothing is cached or mutated between
//! requests.

pub mod config;
mod handlers;
pub mod interactive;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use sentencing_prepare::{PreparedCases, load_cases};

pub use config::{ConfigError, ConfigOverrides, ServerConfig};

/// Shared application state.
pub struct AppState {
    /// Prepared case records, immutable for the server's lifetime.
    pub cases: Arc<PreparedCases>,
    /// Default detail table page size.
    pub page_size: usize,
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/overview", web::get().to(handlers::overview_metrics))
            .route("/options", web::get().to(handlers::options))
            .route("/dashboard", web::get().to(handlers::dashboard))
            .route("/cases.csv", web::get().to(handlers::cases_csv)),
    );
}

/// Starts the sentencing dashboard API server.
///
/// Loads the dataset at `config.data_path` (falling back to the built-in
/// sample dataset if it cannot be used) and serves the API until shut
/// down. The caller provides the async runtime, e.g. via
/// `#[actix_web::main]`.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    log::info!("Loading cases from {}...", config.data_path.display());
    let cases = load_cases(&config.data_path);
    log::info!("Serving {} cases", cases.len());

    let state = web::Data::new(AppState {
        cases: Arc::new(cases),
        page_size: config.page_size,
    });

    let ServerConfig { bind_addr, port, .. } = config;

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
