// src/db/store.rs

use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::{fs, sync::Mutex};

use crate::{
    common::error::AppError,
    models::{adocao::Adocao, doacao::Doacao, pet::Pet, usuario::Usuario},
};

// O documento completo persistido em disco. Chaves ausentes no arquivo
// viram coleções vazias.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub usuarios: Vec<Usuario>,
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub adocoes: Vec<Adocao>,
    #[serde(default)]
    pub doacoes: Vec<Doacao>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Erro ao ler o banco de dados: {0}")]
    Read(#[source] std::io::Error),

    #[error("Erro ao gravar o banco de dados: {0}")]
    Write(#[source] std::io::Error),

    #[error("Banco de dados corrompido: {0}")]
    Malformed(#[from] serde_json::Error),
}

// Armazenamento em um único arquivo JSON: toda leitura carrega o documento
// inteiro e toda mutação o regrava inteiro. O mutex serializa o ciclo
// ler-alterar-gravar dentro do processo; escritores em outros processos
// continuam em last-write-wins.
#[derive(Clone)]
pub struct JsonStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn read(&self) -> Result<Database, StoreError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    pub async fn write(&self, db: &Database) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.persist(db).await
    }

    /// Executa um ciclo completo ler-alterar-gravar sob o mutex. Se a
    /// closure devolver um erro de negócio, nada é gravado.
    pub async fn update<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Database) -> Result<T, AppError>,
    {
        let _guard = self.lock.lock().await;
        let mut db = self.load().await?;
        let saida = f(&mut db)?;
        self.persist(&db).await?;
        Ok(saida)
    }

    async fn load(&self) -> Result<Database, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                // Primeiro acesso: materializa as quatro coleções vazias.
                let inicial = Database::default();
                self.persist(&inicial).await?;
                Ok(inicial)
            }
            Err(err) => Err(StoreError::Read(err)),
        }
    }

    async fn persist(&self, db: &Database) -> Result<(), StoreError> {
        if let Some(pai) = self.path.parent() {
            if !pai.as_os_str().is_empty() {
                fs::create_dir_all(pai).await.map_err(StoreError::Write)?;
            }
        }
        let dados = serde_json::to_vec_pretty(db)?;
        fs::write(&self.path, dados).await.map_err(StoreError::Write)
    }
}

/// Próximo id sequencial de uma coleção: 1 quando vazia, senão max + 1.
pub fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |maior| maior + 1)
}
