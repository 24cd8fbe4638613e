// src/models/doacao.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doador {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
}

impl Doador {
    pub fn completo(&self) -> bool {
        !self.nome.is_empty() && !self.email.is_empty() && !self.telefone.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doacao {
    pub id: i64,
    // Categoria livre: ração, medicamento, dinheiro...
    pub tipo: String,
    pub doador: Doador,
    // Campos específicos do tipo de doação (quantidade, marca, validade,
    // forma de pagamento), sem esquema fixo
    #[serde(default)]
    pub detalhes: Value,
    #[serde(default)]
    pub observacoes: String,
    pub status: String,
    pub data: DateTime<Utc>,
    pub data_formatada: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_atualizacao: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDoacaoPayload {
    pub tipo: Option<String>,
    pub doador: Option<Doador>,
    pub detalhes: Option<Value>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateDoacaoPayload {
    pub status: Option<String>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DoacaoFilter {
    pub tipo: Option<String>,
}
