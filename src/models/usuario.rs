// src/models/usuario.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// Registro completo, como fica no arquivo. A senha vive apenas no
// armazenamento; respostas da API usam a projeção UsuarioPublico.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub data_cadastro: DateTime<Utc>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_atualizacao: Option<DateTime<Utc>>,
}

// Projeção pública de um usuário (sem senha)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioPublico {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub data_cadastro: DateTime<Utc>,
    pub admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_atualizacao: Option<DateTime<Utc>>,
}

impl From<Usuario> for UsuarioPublico {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            nome: usuario.nome,
            email: usuario.email,
            data_cadastro: usuario.data_cadastro,
            admin: usuario.admin,
            data_atualizacao: usuario.data_atualizacao,
        }
    }
}

// Dados para cadastro de um novo usuário. Campos ausentes viram strings
// vazias e caem nas mensagens de validação de tamanho.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUsuarioPayload {
    #[serde(default)]
    #[validate(length(min = 3, max = 50, message = "O nome deve ter entre 3 e 50 caracteres."))]
    pub nome: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "O e-mail é obrigatório."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 8, message = "A senha deve ter no mínimo 8 caracteres."))]
    pub senha: String,
}

// Atualização parcial: só os campos presentes são aplicados.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUsuarioPayload {
    #[validate(length(min = 3, max = 50, message = "O nome deve ter entre 3 e 50 caracteres."))]
    pub nome: Option<String>,
    pub email: Option<String>,
    #[validate(length(min = 8, message = "A senha deve ter no mínimo 8 caracteres."))]
    pub senha: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub senha: Option<String>,
}
