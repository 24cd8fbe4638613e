use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::store::StoreError;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia. Cada variante
// sabe seu status HTTP e seu código estável no corpo `{error, code}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Um ou mais campos são inválidos.")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Corpo da requisição inválido.")]
    InvalidBody(#[from] JsonRejection),

    #[error("{0}")]
    MissingFields(&'static str),

    #[error("Email e senha são obrigatórios.")]
    MissingCredentials,

    #[error("Email inválido.")]
    InvalidEmail,

    #[error("Email já cadastrado.")]
    EmailAlreadyExists,

    #[error("Email ou senha incorretos.")]
    InvalidCredentials,

    #[error("Status inválido. Use: pendente, aprovado ou rejeitado.")]
    InvalidStatus,

    #[error("Nome, email, telefone e CPF do adotante são obrigatórios.")]
    IncompleteAdopterData,

    #[error("Nome, email e telefone do doador são obrigatórios.")]
    IncompleteDonorData,

    #[error("Usuário não encontrado.")]
    UserNotFound,

    #[error("Pet não encontrado.")]
    PetNotFound,

    #[error("Adoção não encontrada.")]
    AdoptionNotFound,

    #[error("Doação não encontrada.")]
    DonationNotFound,

    #[error("Erro ao acessar banco de dados.")]
    Store(#[from] StoreError),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor.")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::EmailAlreadyExists => "EMAIL_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::IncompleteAdopterData => "INCOMPLETE_ADOPTER_DATA",
            Self::IncompleteDonorData => "INCOMPLETE_DONOR_DATA",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PetNotFound => "PET_NOT_FOUND",
            Self::AdoptionNotFound => "ADOPTION_NOT_FOUND",
            Self::DonationNotFound => "DONATION_NOT_FOUND",
            Self::Store(StoreError::Write(_)) => "DB_WRITE_ERROR",
            Self::Store(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::InvalidBody(_)
            | Self::MissingFields(_)
            | Self::MissingCredentials
            | Self::InvalidEmail
            | Self::InvalidStatus
            | Self::IncompleteAdopterData
            | Self::IncompleteDonorData => StatusCode::BAD_REQUEST,
            Self::EmailAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserNotFound
            | Self::PetNotFound
            | Self::AdoptionNotFound
            | Self::DonationNotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Erros de validação devolvem também o detalhe por campo.
        if let Self::Validation(ref errors) = self {
            let mut details = std::collections::HashMap::new();
            for (field, field_errors) in errors.field_errors() {
                let messages: Vec<String> = field_errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect();
                details.insert(field.to_string(), messages);
            }
            let body = Json(json!({
                "error": self.to_string(),
                "code": self.code(),
                "details": details,
            }));
            return (StatusCode::BAD_REQUEST, body).into_response();
        }

        // O detalhe dos erros internos vai para o log, nunca para o cliente.
        match &self {
            Self::Store(err) => tracing::error!("Erro de banco de dados: {}", err),
            Self::Internal(err) => tracing::error!("Erro Interno do Servidor: {}", err),
            _ => {}
        }

        let body = Json(json!({ "error": self.to_string(), "code": self.code() }));
        (self.status(), body).into_response()
    }
}
