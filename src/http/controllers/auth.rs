use actix_web::{
    web::{self, Json},
    HttpResponse,
};

use crate::{
    http::error::Result,
    types::form::{self, login, register, Payload},
    App,
};

// Payloads carry passwords, never record them on the span.
#[tracing::instrument(skip_all)]
pub async fn login(app: web::Data<App>, payload: Json<Payload>) -> Result<HttpResponse> {
    let form = form::parse::<login::Request>(&payload)?;
    tracing::debug!(email = %form.email, "login form passed validation");

    let response = app.authenticator.login(form).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[tracing::instrument(skip_all)]
pub async fn register(app: web::Data<App>, payload: Json<Payload>) -> Result<HttpResponse> {
    let form = form::parse::<register::Request>(&payload)?;
    tracing::debug!(email = %form.email, "registration form passed validation");

    let response = app.authenticator.register(form).await?;
    Ok(HttpResponse::Created().json(response))
}
