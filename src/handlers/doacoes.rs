use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde_json::json;

use crate::{
    common::error::AppError,
    config::AppState,
    models::doacao::{CreateDoacaoPayload, DoacaoFilter, UpdateDoacaoPayload},
};

// GET /doacoes
pub async fn list_doacoes(
    State(app_state): State<AppState>,
    Query(filtro): Query<DoacaoFilter>,
) -> Result<impl IntoResponse, AppError> {
    let doacoes = app_state.doacao_service.list(filtro).await?;
    Ok(Json(doacoes))
}

// GET /doacoes/{id}
pub async fn get_doacao(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let doacao = app_state.doacao_service.get(id).await?;

    Ok(Json(json!({ "success": true, "doacao": doacao })))
}

// POST /doacoes
pub async fn create_doacao(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateDoacaoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let doacao = app_state.doacao_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "doacao": doacao,
            "message": "Doação registrada com sucesso"
        })),
    ))
}

// PUT /doacoes/{id}
pub async fn update_doacao(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateDoacaoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let doacao = app_state.doacao_service.update(id, payload).await?;

    Ok(Json(json!({
        "success": true,
        "doacao": doacao,
        "message": "Doação atualizada com sucesso"
    })))
}

// DELETE /doacoes/{id}
pub async fn delete_doacao(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let removida = app_state.doacao_service.delete(id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Doação removida com sucesso",
        "doacao": removida
    })))
}
