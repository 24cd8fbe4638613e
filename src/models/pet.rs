// src/models/pet.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub nome: String,
    pub tipo: String,
    // Persistida como null quando não informada
    pub idade: Option<i64>,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub raca: String,
    #[serde(default)]
    pub local: String,
    #[serde(default)]
    pub contato: String,
    // URL ou base64; não passa por sanitize
    #[serde(default)]
    pub imagem: String,
    pub usuario_id: Option<i64>,
    pub disponivel: bool,
    pub data_cadastro: DateTime<Utc>,
    // Carimbada pela aprovação de uma adoção
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_adocao: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_atualizacao: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "O tipo é obrigatório."))]
    pub tipo: String,
    pub idade: Option<i64>,
    pub descricao: Option<String>,
    pub raca: Option<String>,
    pub local: Option<String>,
    pub contato: Option<String>,
    pub imagem: Option<String>,
    pub usuario_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: Option<String>,
    #[validate(length(min = 1, message = "O tipo é obrigatório."))]
    pub tipo: Option<String>,
    pub idade: Option<i64>,
    pub descricao: Option<String>,
    pub raca: Option<String>,
    pub local: Option<String>,
    pub contato: Option<String>,
    pub imagem: Option<String>,
    pub disponivel: Option<bool>,
}

// Filtros de listagem, combinados com E lógico.
#[derive(Debug, Default, Deserialize)]
pub struct PetFilter {
    pub tipo: Option<String>,
    pub idade: Option<i64>,
    pub local: Option<String>,
    pub disponivel: Option<bool>,
}
