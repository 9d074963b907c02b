use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use padron::{
    auth::Authenticator,
    models::{FormData, Registration},
    remote::RegistrationStore,
    stats::{self, Stats},
    validate::validate,
};

use crate::{error::AppError, session, state::AppState};

#[derive(Deserialize)]
pub struct LoginPayload {
    password: String,
}

#[derive(Serialize)]
pub struct SessionFlag {
    authenticated: bool,
}

#[derive(Serialize)]
pub struct DashboardData {
    stats: Stats,
    registrations: Vec<Registration>,
}

/// Same rules as the client form run again here; nothing reaches the
/// table unvalidated.
pub async fn registrar_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<FormData>,
) -> Result<StatusCode, AppError> {
    let errors = validate(&form);
    if !errors.is_empty() {
        return Err(AppError::Invalid(errors));
    }

    state.store.insert(&form.into_registration()).await?;

    Ok(StatusCode::CREATED)
}

/// The server holds no session state; a successful login just hands the
/// flag back for the client to persist.
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<SessionFlag>, AppError> {
    if !state.auth.verify(&payload.password) {
        return Err(AppError::Unauthorized);
    }

    info!("Admin session granted");
    Ok(Json(SessionFlag {
        authenticated: true,
    }))
}

pub async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DashboardData>, AppError> {
    if !session::authenticated(&headers) {
        return Err(AppError::Unauthorized);
    }

    let registrations = state.store.list_all().await?;
    let stats = stats::compute(&registrations, Local::now().date_naive());

    Ok(Json(DashboardData {
        stats,
        registrations,
    }))
}
