use actix_web::web;

use crate::http::Error;

pub mod auth;
pub mod health;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health)).service(
        web::scope("/auth")
            .route("/login", web::post().to(auth::login))
            .route("/register", web::post().to(auth::register)),
    );
}

/// Unreadable, oversized or non-object bodies are answered
/// with a `malformed_body` error instead of actix's plain text.
#[must_use]
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|error, _req| Error::from(error).into())
}
