// src/models/estatisticas.rs

use std::collections::BTreeMap;

use serde::Serialize;

// Agregados devolvidos por GET /estatisticas.
#[derive(Debug, Serialize)]
pub struct Estatisticas {
    pub usuarios: EstatisticasUsuarios,
    pub pets: EstatisticasPets,
    pub adocoes: EstatisticasAdocoes,
    pub doacoes: EstatisticasDoacoes,
}

#[derive(Debug, Serialize)]
pub struct EstatisticasUsuarios {
    pub total: usize,
    pub admins: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstatisticasPets {
    pub total: usize,
    pub disponiveis: usize,
    pub adotados: usize,
    pub por_tipo: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
pub struct EstatisticasAdocoes {
    pub total: usize,
    pub pendentes: usize,
    pub aprovadas: usize,
    pub rejeitadas: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstatisticasDoacoes {
    pub total: usize,
    pub por_tipo: BTreeMap<String, usize>,
}
