use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::pet::{CreatePetPayload, PetFilter, UpdatePetPayload},
};

// GET /pets — a listagem responde o array puro, que é o que a vitrine
// do cliente consome.
pub async fn list_pets(
    State(app_state): State<AppState>,
    Query(filtro): Query<PetFilter>,
) -> Result<impl IntoResponse, AppError> {
    let pets = app_state.pet_service.list(filtro).await?;
    Ok(Json(pets))
}

// GET /pets/{id}
pub async fn get_pet(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let pet = app_state.pet_service.get(id).await?;

    Ok(Json(json!({ "success": true, "pet": pet })))
}

// POST /pets
pub async fn create_pet(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreatePetPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::Validation)?;

    let pet = app_state.pet_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "pet": pet,
            "message": "Pet cadastrado com sucesso"
        })),
    ))
}

// PUT /pets/{id}
pub async fn update_pet(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdatePetPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::Validation)?;

    let pet = app_state.pet_service.update(id, payload).await?;

    Ok(Json(json!({
        "success": true,
        "pet": pet,
        "message": "Pet atualizado com sucesso"
    })))
}

// DELETE /pets/{id}
pub async fn delete_pet(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let removido = app_state.pet_service.delete(id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Pet removido com sucesso",
        "pet": removido.nome
    })))
}
