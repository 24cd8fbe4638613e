// src/services/usuario_service.rs

use chrono::Utc;

use crate::{
    common::{
        error::AppError,
        validation::{is_valid_email, sanitize},
    },
    db::store::{JsonStore, next_id},
    models::usuario::{CreateUsuarioPayload, UpdateUsuarioPayload, Usuario, UsuarioPublico},
};

// O repositório de usuários sobre o arquivo JSON. A senha fica em texto
// puro no armazenamento e nunca aparece nos retornos públicos.
#[derive(Clone)]
pub struct UsuarioService {
    store: JsonStore,
}

impl UsuarioService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    // Busca linear por email (comparado em minúsculas) e senha exata.
    pub async fn login(&self, email: &str, senha: &str) -> Result<UsuarioPublico, AppError> {
        if !is_valid_email(email) {
            return Err(AppError::InvalidEmail);
        }

        let db = self.store.read().await?;
        db.usuarios
            .into_iter()
            .find(|u| u.email.to_lowercase() == email.to_lowercase() && u.senha == senha)
            .map(UsuarioPublico::from)
            .ok_or(AppError::InvalidCredentials)
    }

    pub async fn create(&self, payload: CreateUsuarioPayload) -> Result<UsuarioPublico, AppError> {
        if !is_valid_email(&payload.email) {
            return Err(AppError::InvalidEmail);
        }

        self.store
            .update(move |db| {
                let email = payload.email.to_lowercase();
                if db.usuarios.iter().any(|u| u.email.to_lowercase() == email) {
                    return Err(AppError::EmailAlreadyExists);
                }

                let usuario = Usuario {
                    id: next_id(db.usuarios.iter().map(|u| u.id)),
                    nome: sanitize(&payload.nome),
                    email,
                    senha: payload.senha,
                    data_cadastro: Utc::now(),
                    admin: false,
                    data_atualizacao: None,
                };
                db.usuarios.push(usuario.clone());
                Ok(UsuarioPublico::from(usuario))
            })
            .await
    }

    pub async fn list(&self) -> Result<Vec<UsuarioPublico>, AppError> {
        let db = self.store.read().await?;
        Ok(db.usuarios.into_iter().map(UsuarioPublico::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<UsuarioPublico, AppError> {
        let db = self.store.read().await?;
        db.usuarios
            .into_iter()
            .find(|u| u.id == id)
            .map(UsuarioPublico::from)
            .ok_or(AppError::UserNotFound)
    }

    // Sobreposição parcial: só os campos presentes mudam; o carimbo de
    // atualização é sempre renovado.
    pub async fn update(
        &self,
        id: i64,
        payload: UpdateUsuarioPayload,
    ) -> Result<UsuarioPublico, AppError> {
        if let Some(email) = payload.email.as_deref() {
            if !is_valid_email(email) {
                return Err(AppError::InvalidEmail);
            }
        }

        self.store
            .update(move |db| {
                let pos = db
                    .usuarios
                    .iter()
                    .position(|u| u.id == id)
                    .ok_or(AppError::UserNotFound)?;

                let novo_email = payload.email.map(|e| e.to_lowercase());
                if let Some(email) = novo_email.as_deref() {
                    // Unicidade vale também na atualização, ignorando o
                    // próprio registro.
                    if db
                        .usuarios
                        .iter()
                        .any(|u| u.id != id && u.email.to_lowercase() == email)
                    {
                        return Err(AppError::EmailAlreadyExists);
                    }
                }

                let usuario = &mut db.usuarios[pos];
                if let Some(nome) = payload.nome {
                    usuario.nome = sanitize(&nome);
                }
                if let Some(email) = novo_email {
                    usuario.email = email;
                }
                if let Some(senha) = payload.senha {
                    usuario.senha = senha;
                }
                usuario.data_atualizacao = Some(Utc::now());

                Ok(UsuarioPublico::from(usuario.clone()))
            })
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<Usuario, AppError> {
        self.store
            .update(move |db| {
                let pos = db
                    .usuarios
                    .iter()
                    .position(|u| u.id == id)
                    .ok_or(AppError::UserNotFound)?;
                Ok(db.usuarios.remove(pos))
            })
            .await
    }
}
