// src/models/adocao.rs

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusAdocao {
    Pendente,
    Aprovado,
    Rejeitado,
}

impl StatusAdocao {
    /// Interpreta o valor vindo do cliente; qualquer outro texto é inválido.
    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "pendente" => Some(Self::Pendente),
            "aprovado" => Some(Self::Aprovado),
            "rejeitado" => Some(Self::Rejeitado),
            _ => None,
        }
    }
}

impl fmt::Display for StatusAdocao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texto = match self {
            Self::Pendente => "pendente",
            Self::Aprovado => "aprovado",
            Self::Rejeitado => "rejeitado",
        };
        f.write_str(texto)
    }
}

// Dados do adotante embutidos na solicitação. Os quatro primeiros campos
// são obrigatórios; ausências viram strings vazias e são checadas no serviço.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adotante {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub experiencia: String,
    #[serde(default)]
    pub motivacao: String,
}

impl Adotante {
    pub fn completo(&self) -> bool {
        !self.nome.is_empty()
            && !self.email.is_empty()
            && !self.telefone.is_empty()
            && !self.cpf.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adocao {
    pub id: i64,
    pub pet_id: i64,
    // Cópia do nome do pet no momento da solicitação
    pub pet_nome: String,
    pub adotante: Adotante,
    // Instantâneo opaco do usuário que fez a solicitação
    pub usuario_logado: Option<Value>,
    #[serde(rename = "datasolicitacao")]
    pub data_solicitacao: DateTime<Utc>,
    pub data_solicitacao_formatada: String,
    pub status: StatusAdocao,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_atualizacao: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdocaoPayload {
    pub pet_id: Option<i64>,
    pub pet_nome: Option<String>,
    pub adotante: Option<Adotante>,
    pub usuario_logado: Option<Value>,
}

// PUT /adocoes/{id} é o endpoint de transição de status.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAdocaoPayload {
    pub status: Option<String>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdocaoFilter {
    pub status: Option<String>,
    pub usuario_id: Option<i64>,
    pub pet_id: Option<i64>,
}
