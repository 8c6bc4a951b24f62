#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod app;
pub mod auth;
pub mod config;
pub mod http;
pub mod telemetry;
pub mod types;
pub mod util;

pub use app::App;
