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
    models::adocao::{AdocaoFilter, CreateAdocaoPayload, UpdateAdocaoPayload},
};

// GET /adocoes
pub async fn list_adocoes(
    State(app_state): State<AppState>,
    Query(filtro): Query<AdocaoFilter>,
) -> Result<impl IntoResponse, AppError> {
    let adocoes = app_state.adocao_service.list(filtro).await?;
    Ok(Json(adocoes))
}

// GET /adocoes/{id}
pub async fn get_adocao(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let adocao = app_state.adocao_service.get(id).await?;

    Ok(Json(json!({ "success": true, "adocao": adocao })))
}

// POST /adocoes
pub async fn create_adocao(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateAdocaoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let adocao = app_state.adocao_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "adocao": adocao,
            "message": "Solicitação de adoção registrada com sucesso"
        })),
    ))
}

// PUT /adocoes/{id} — transição de status (pendente/aprovado/rejeitado)
pub async fn update_adocao(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateAdocaoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let adocao = app_state.adocao_service.update(id, payload).await?;

    let message = format!("Adoção {} com sucesso", adocao.status);
    Ok(Json(json!({
        "success": true,
        "adocao": adocao,
        "message": message
    })))
}

// DELETE /adocoes/{id}
pub async fn delete_adocao(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let removida = app_state.adocao_service.delete(id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Adoção cancelada com sucesso",
        "adocao": removida
    })))
}
