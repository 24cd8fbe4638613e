use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::usuario::{CreateUsuarioPayload, UpdateUsuarioPayload},
};

// POST /usuarios
pub async fn create_usuario(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateUsuarioPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::Validation)?;

    let usuario = app_state.usuario_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "usuario": usuario,
            "message": "Usuário cadastrado com sucesso"
        })),
    ))
}

// GET /usuarios
pub async fn list_usuarios(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let usuarios = app_state.usuario_service.list().await?;

    Ok(Json(json!({
        "success": true,
        "total": usuarios.len(),
        "usuarios": usuarios
    })))
}

// GET /usuarios/{id}
pub async fn get_usuario(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = app_state.usuario_service.get(id).await?;

    Ok(Json(json!({ "success": true, "usuario": usuario })))
}

// PUT /usuarios/{id}
pub async fn update_usuario(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateUsuarioPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::Validation)?;

    let usuario = app_state.usuario_service.update(id, payload).await?;

    Ok(Json(json!({
        "success": true,
        "usuario": usuario,
        "message": "Usuário atualizado com sucesso"
    })))
}

// DELETE /usuarios/{id}
pub async fn delete_usuario(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let removido = app_state.usuario_service.delete(id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Usuário removido com sucesso",
        "usuario": removido.nome
    })))
}
