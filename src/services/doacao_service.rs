// src/services/doacao_service.rs

use chrono::{Local, Utc};
use serde_json::json;

use crate::{
    common::{error::AppError, validation::sanitize},
    db::store::{JsonStore, next_id},
    models::doacao::{CreateDoacaoPayload, Doacao, DoacaoFilter, Doador, UpdateDoacaoPayload},
};

#[derive(Clone)]
pub struct DoacaoService {
    store: JsonStore,
}

impl DoacaoService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, filtro: DoacaoFilter) -> Result<Vec<Doacao>, AppError> {
        let db = self.store.read().await?;
        let mut doacoes = db.doacoes;

        if let Some(tipo) = &filtro.tipo {
            let tipo = tipo.to_lowercase();
            doacoes.retain(|d| d.tipo.to_lowercase() == tipo);
        }

        Ok(doacoes)
    }

    pub async fn get(&self, id: i64) -> Result<Doacao, AppError> {
        let db = self.store.read().await?;
        db.doacoes
            .into_iter()
            .find(|d| d.id == id)
            .ok_or(AppError::DonationNotFound)
    }

    pub async fn create(&self, payload: CreateDoacaoPayload) -> Result<Doacao, AppError> {
        let tipo = payload
            .tipo
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingFields("Tipo e dados do doador são obrigatórios."))?;
        let doador = payload
            .doador
            .ok_or(AppError::MissingFields("Tipo e dados do doador são obrigatórios."))?;
        if !doador.completo() {
            return Err(AppError::IncompleteDonorData);
        }

        self.store
            .update(move |db| {
                let doacao = Doacao {
                    id: next_id(db.doacoes.iter().map(|d| d.id)),
                    tipo: sanitize(&tipo),
                    doador: Doador {
                        nome: sanitize(&doador.nome),
                        email: doador.email,
                        telefone: doador.telefone,
                    },
                    detalhes: payload.detalhes.unwrap_or_else(|| json!({})),
                    observacoes: sanitize(payload.observacoes.as_deref().unwrap_or_default()),
                    status: "recebido".to_string(),
                    data: Utc::now(),
                    data_formatada: Local::now().format("%d/%m/%Y, %H:%M:%S").to_string(),
                    data_atualizacao: None,
                };
                db.doacoes.push(doacao.clone());
                Ok(doacao)
            })
            .await
    }

    // Sobreposição parcial de status e observações; o carimbo de
    // atualização é sempre renovado.
    pub async fn update(&self, id: i64, payload: UpdateDoacaoPayload) -> Result<Doacao, AppError> {
        self.store
            .update(move |db| {
                let doacao = db
                    .doacoes
                    .iter_mut()
                    .find(|d| d.id == id)
                    .ok_or(AppError::DonationNotFound)?;

                if let Some(status) = payload.status.filter(|s| !s.is_empty()) {
                    doacao.status = status;
                }
                if let Some(observacoes) = payload.observacoes.filter(|o| !o.is_empty()) {
                    doacao.observacoes = sanitize(&observacoes);
                }
                doacao.data_atualizacao = Some(Utc::now());

                Ok(doacao.clone())
            })
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<Doacao, AppError> {
        self.store
            .update(move |db| {
                let pos = db
                    .doacoes
                    .iter()
                    .position(|d| d.id == id)
                    .ok_or(AppError::DonationNotFound)?;
                Ok(db.doacoes.remove(pos))
            })
            .await
    }
}
