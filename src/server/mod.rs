//! Inbound HTTP service

use actix_web::{App, HttpServer, middleware, web};
use log::info;

use crate::config::Config;
use crate::error::Result;
use crate::scan::Scanner;

pub mod handlers;

pub use handlers::configure_routes;

/// Application state shared across handlers
pub struct AppState {
    pub scanner: Scanner,
}

impl AppState {
    pub fn new(scanner: Scanner) -> Self {
        Self { scanner }
    }
}

/// Serve the scan endpoint on the configured address until interrupted
pub async fn run(config: &Config) -> Result<()> {
    let scanner = Scanner::from_config(config)?;
    let state = web::Data::new(AppState::new(scanner));
    let addr = config.bind_address();

    info!(
        "Starting starscan server on {} (upstream {}, {})",
        addr,
        config.api_host,
        if config.has_token() {
            "authenticated"
        } else {
            "unauthenticated"
        }
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}
