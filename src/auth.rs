//! The seam between validated forms and the service that actually
//! authenticates users.
use error_stack::Report;
use futures::future::{BoxFuture, FutureExt};
use serde_json::{json, Value};
use thiserror::Error;

use crate::types::form::{login, register};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthenticatorError {
    #[error("Credentials were rejected")]
    Rejected,
    #[error("Authentication service failed")]
    Failed,
}

pub type AuthResult = Result<Value, Report<AuthenticatorError>>;

/// Receives forms that already passed validation. Whatever JSON value
/// it resolves to is sent back to the client as is.
pub trait Authenticator: Send + Sync + 'static {
    fn login(&self, form: login::Request) -> BoxFuture<'_, AuthResult>;

    fn register(&self, form: register::Request) -> BoxFuture<'_, AuthResult>;
}

/// Accepts every form without contacting anything and echoes
/// back what it received, minus the password.
#[derive(Debug, Default, Clone, Copy)]
pub struct Acknowledge;

impl Authenticator for Acknowledge {
    fn login(&self, form: login::Request) -> BoxFuture<'_, AuthResult> {
        async move {
            tracing::info!(email = %form.email, "acknowledged login form");
            Ok(json!({
                "accepted": true,
                "kind": "login",
                "email": form.email,
            }))
        }
        .boxed()
    }

    fn register(&self, form: register::Request) -> BoxFuture<'_, AuthResult> {
        async move {
            tracing::info!(email = %form.email, "acknowledged registration form");
            Ok(json!({
                "accepted": true,
                "kind": "registration",
                "email": form.email,
                "firstName": form.first_name,
                "lastName": form.last_name,
            }))
        }
        .boxed()
    }
}
