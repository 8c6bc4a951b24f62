use actix_web::{web, App as ActixApp, HttpServer};
use error_stack::{Result, ResultExt};
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use crate::App;

pub mod controllers;
pub mod error;

pub use error::Error;

#[derive(Debug, Error)]
#[error("Failed to start HTTP server")]
pub struct StartServerError;

/// Registers the application state, JSON extractor settings
/// and every route onto an actix service.
pub fn service(app: App) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let json_limit = app.config.json_limit;
        cfg.app_data(web::Data::new(app))
            .app_data(controllers::json_config(json_limit))
            .configure(controllers::configure);
    }
}

pub async fn run(app: App) -> Result<(), StartServerError> {
    let config = app.config.clone();

    let server = HttpServer::new(move || {
        ActixApp::new()
            .wrap(TracingLogger::default())
            .configure(service(app.clone()))
    })
    .workers(config.workers.get())
    .bind((config.ip, config.port))
    .change_context(StartServerError)
    .attach_printable_lazy(|| format!("could not bind to {}:{}", config.ip, config.port))?;

    tracing::info!("Listening on http://{}:{}", config.ip, config.port);
    server.run().await.change_context(StartServerError)
}
