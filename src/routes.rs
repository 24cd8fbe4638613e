// src/routes.rs

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::{config::AppState, handlers, middleware};

// Limite de 50MB no corpo, para aceitar imagens em base64.
const LIMITE_CORPO: usize = 50 * 1024 * 1024;

// Monta o router completo. O binário e os testes de integração usam a
// mesma função.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route(
            "/usuarios",
            post(handlers::usuarios::create_usuario).get(handlers::usuarios::list_usuarios),
        )
        .route(
            "/usuarios/{id}",
            get(handlers::usuarios::get_usuario)
                .put(handlers::usuarios::update_usuario)
                .delete(handlers::usuarios::delete_usuario),
        )
        .route(
            "/pets",
            get(handlers::pets::list_pets).post(handlers::pets::create_pet),
        )
        .route(
            "/pets/{id}",
            get(handlers::pets::get_pet)
                .put(handlers::pets::update_pet)
                .delete(handlers::pets::delete_pet),
        )
        .route(
            "/adocoes",
            get(handlers::adocoes::list_adocoes).post(handlers::adocoes::create_adocao),
        )
        .route(
            "/adocoes/{id}",
            get(handlers::adocoes::get_adocao)
                .put(handlers::adocoes::update_adocao)
                .delete(handlers::adocoes::delete_adocao),
        )
        .route(
            "/doacoes",
            get(handlers::doacoes::list_doacoes).post(handlers::doacoes::create_doacao),
        )
        .route(
            "/doacoes/{id}",
            get(handlers::doacoes::get_doacao)
                .put(handlers::doacoes::update_doacao)
                .delete(handlers::doacoes::delete_doacao),
        )
        .route("/estatisticas", get(handlers::estatisticas::estatisticas))
        .route("/health", get(handlers::estatisticas::health))
        .fallback(rota_nao_encontrada)
        .layer(axum_middleware::from_fn(
            middleware::log::registrar_requisicao,
        ))
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(LIMITE_CORPO))
        .with_state(app_state)
}

async fn rota_nao_encontrada(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Rota não encontrada",
            "code": "NOT_FOUND",
            "path": uri.path()
        })),
    )
}
