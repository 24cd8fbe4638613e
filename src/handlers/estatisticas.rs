use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

use crate::{common::error::AppError, config::AppState};

// GET /estatisticas
pub async fn estatisticas(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let estatisticas = app_state.estatisticas_service.coletar().await?;

    Ok(Json(json!({
        "success": true,
        "estatisticas": estatisticas,
        "dataConsulta": Utc::now()
    })))
}

// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "message": "Servidor Unipet rodando",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
