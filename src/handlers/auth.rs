use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde_json::json;

use crate::{common::error::AppError, config::AppState, models::usuario::LoginPayload};

// POST /login
pub async fn login(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<LoginPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload
        .email
        .filter(|e| !e.is_empty())
        .ok_or(AppError::MissingCredentials)?;
    let senha = payload
        .senha
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingCredentials)?;

    let usuario = app_state.usuario_service.login(&email, &senha).await?;

    Ok(Json(json!({
        "success": true,
        "usuario": usuario,
        "message": "Login realizado com sucesso"
    })))
}
