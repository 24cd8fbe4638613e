// src/config.rs

use std::env;

use crate::{
    db::store::JsonStore,
    services::{AdocaoService, DoacaoService, EstatisticasService, PetService, UsuarioService},
};

#[derive(Clone)]
pub struct AppState {
    pub store: JsonStore,
    pub usuario_service: UsuarioService,
    pub pet_service: PetService,
    pub adocao_service: AdocaoService,
    pub doacao_service: DoacaoService,
    pub estatisticas_service: EstatisticasService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let db_path = env::var("DB_PATH").unwrap_or_else(|_| "db/db.json".to_string());
        let store = JsonStore::new(&db_path);

        // Garante que o arquivo exista e esteja legível antes de aceitar
        // requisições; no primeiro boot isso cria as coleções vazias.
        store.read().await?;
        tracing::info!("✅ Banco de dados pronto em {}", db_path);

        Ok(Self::with_store(store))
    }

    // Monta o gráfico de serviços sobre um store já criado. Os testes de
    // integração passam aqui um arquivo temporário.
    pub fn with_store(store: JsonStore) -> Self {
        Self {
            usuario_service: UsuarioService::new(store.clone()),
            pet_service: PetService::new(store.clone()),
            adocao_service: AdocaoService::new(store.clone()),
            doacao_service: DoacaoService::new(store.clone()),
            estatisticas_service: EstatisticasService::new(store.clone()),
            store,
        }
    }
}
