// src/services/adocao_service.rs

use chrono::{Local, Utc};
use serde_json::Value;

use crate::{
    common::{error::AppError, validation::sanitize},
    db::store::{JsonStore, next_id},
    models::adocao::{
        Adocao, AdocaoFilter, Adotante, CreateAdocaoPayload, StatusAdocao, UpdateAdocaoPayload,
    },
};

#[derive(Clone)]
pub struct AdocaoService {
    store: JsonStore,
}

impl AdocaoService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, filtro: AdocaoFilter) -> Result<Vec<Adocao>, AppError> {
        let db = self.store.read().await?;
        let mut adocoes = db.adocoes;

        if let Some(status) = &filtro.status {
            adocoes.retain(|a| a.status.to_string() == *status);
        }
        if let Some(usuario_id) = filtro.usuario_id {
            // Compara contra o instantâneo do usuário gravado na solicitação.
            adocoes.retain(|a| {
                a.usuario_logado
                    .as_ref()
                    .and_then(|u| u.get("id"))
                    .and_then(Value::as_i64)
                    == Some(usuario_id)
            });
        }
        if let Some(pet_id) = filtro.pet_id {
            adocoes.retain(|a| a.pet_id == pet_id);
        }

        Ok(adocoes)
    }

    pub async fn get(&self, id: i64) -> Result<Adocao, AppError> {
        let db = self.store.read().await?;
        db.adocoes
            .into_iter()
            .find(|a| a.id == id)
            .ok_or(AppError::AdoptionNotFound)
    }

    // A solicitação nasce pendente e exige que o pet exista.
    pub async fn create(&self, payload: CreateAdocaoPayload) -> Result<Adocao, AppError> {
        let pet_id = payload
            .pet_id
            .ok_or(AppError::MissingFields("PetId e dados do adotante são obrigatórios."))?;
        let adotante = payload
            .adotante
            .ok_or(AppError::MissingFields("PetId e dados do adotante são obrigatórios."))?;
        if !adotante.completo() {
            return Err(AppError::IncompleteAdopterData);
        }

        self.store
            .update(move |db| {
                let pet = db
                    .pets
                    .iter()
                    .find(|p| p.id == pet_id)
                    .ok_or(AppError::PetNotFound)?;

                let adocao = Adocao {
                    id: next_id(db.adocoes.iter().map(|a| a.id)),
                    pet_id,
                    pet_nome: payload.pet_nome.unwrap_or_else(|| pet.nome.clone()),
                    adotante: Adotante {
                        nome: sanitize(&adotante.nome),
                        email: adotante.email,
                        telefone: adotante.telefone,
                        cpf: adotante.cpf,
                        endereco: sanitize(&adotante.endereco),
                        experiencia: adotante.experiencia,
                        motivacao: sanitize(&adotante.motivacao),
                    },
                    usuario_logado: payload.usuario_logado,
                    data_solicitacao: Utc::now(),
                    data_solicitacao_formatada: Local::now()
                        .format("%d/%m/%Y, %H:%M:%S")
                        .to_string(),
                    status: StatusAdocao::Pendente,
                    observacoes: None,
                    data_atualizacao: None,
                };
                db.adocoes.push(adocao.clone());
                Ok(adocao)
            })
            .await
    }

    // Transição de status. Aprovar retira o pet da vitrine e carimba a data
    // da adoção; qualquer outra transição não toca no pet.
    pub async fn update(&self, id: i64, payload: UpdateAdocaoPayload) -> Result<Adocao, AppError> {
        let status = payload
            .status
            .as_deref()
            .and_then(StatusAdocao::parse)
            .ok_or(AppError::InvalidStatus)?;

        self.store
            .update(move |db| {
                let pos = db
                    .adocoes
                    .iter()
                    .position(|a| a.id == id)
                    .ok_or(AppError::AdoptionNotFound)?;

                db.adocoes[pos].status = status;
                db.adocoes[pos].data_atualizacao = Some(Utc::now());
                if let Some(observacoes) = payload.observacoes.filter(|o| !o.is_empty()) {
                    db.adocoes[pos].observacoes = Some(sanitize(&observacoes));
                }

                if status == StatusAdocao::Aprovado {
                    let pet_id = db.adocoes[pos].pet_id;
                    if let Some(pet) = db.pets.iter_mut().find(|p| p.id == pet_id) {
                        pet.disponivel = false;
                        pet.data_adocao = Some(Utc::now());
                    }
                }

                Ok(db.adocoes[pos].clone())
            })
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<Adocao, AppError> {
        self.store
            .update(move |db| {
                let pos = db
                    .adocoes
                    .iter()
                    .position(|a| a.id == id)
                    .ok_or(AppError::AdoptionNotFound)?;
                Ok(db.adocoes.remove(pos))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{models::pet::CreatePetPayload, services::PetService};

    fn store_temporario() -> JsonStore {
        let caminho =
            std::env::temp_dir().join(format!("unipet_adocoes_{}.json", uuid::Uuid::new_v4()));
        JsonStore::new(caminho)
    }

    async fn cadastra_pet(store: &JsonStore, nome: &str) -> Result<i64, AppError> {
        let pet = PetService::new(store.clone())
            .create(CreatePetPayload {
                nome: nome.into(),
                tipo: "cachorro".into(),
                idade: None,
                descricao: None,
                raca: None,
                local: None,
                contato: None,
                imagem: None,
                usuario_id: None,
            })
            .await?;
        Ok(pet.id)
    }

    fn adotante() -> Adotante {
        Adotante {
            nome: "Maria Souza".into(),
            email: "maria@x.com".into(),
            telefone: "11999990000".into(),
            cpf: "12345678900".into(),
            endereco: String::new(),
            experiencia: String::new(),
            motivacao: String::new(),
        }
    }

    fn payload(pet_id: i64) -> CreateAdocaoPayload {
        CreateAdocaoPayload {
            pet_id: Some(pet_id),
            pet_nome: None,
            adotante: Some(adotante()),
            usuario_logado: None,
        }
    }

    #[tokio::test]
    async fn create_nasce_pendente_com_nome_do_pet() -> Result<(), anyhow::Error> {
        let store = store_temporario();
        let pet_id = cadastra_pet(&store, "Rex").await?;
        let service = AdocaoService::new(store);

        let adocao = service.create(payload(pet_id)).await?;
        assert_eq!(adocao.status, StatusAdocao::Pendente);
        assert_eq!(adocao.pet_nome, "Rex");
        assert_eq!(adocao.id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn create_exige_pet_existente_e_adotante_completo() -> Result<(), anyhow::Error> {
        let store = store_temporario();
        let pet_id = cadastra_pet(&store, "Rex").await?;
        let service = AdocaoService::new(store);

        assert!(matches!(
            service.create(payload(999)).await,
            Err(AppError::PetNotFound)
        ));

        let mut incompleto = adotante();
        incompleto.cpf = String::new();
        assert!(matches!(
            service
                .create(CreateAdocaoPayload {
                    adotante: Some(incompleto),
                    ..payload(pet_id)
                })
                .await,
            Err(AppError::IncompleteAdopterData)
        ));

        assert!(matches!(
            service
                .create(CreateAdocaoPayload {
                    pet_id: None,
                    ..payload(pet_id)
                })
                .await,
            Err(AppError::MissingFields(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn aprovar_marca_o_pet_como_indisponivel() -> Result<(), anyhow::Error> {
        let store = store_temporario();
        let pet_id = cadastra_pet(&store, "Rex").await?;
        let pets = PetService::new(store.clone());
        let service = AdocaoService::new(store);

        let adocao = service.create(payload(pet_id)).await?;
        let aprovada = service
            .update(
                adocao.id,
                UpdateAdocaoPayload {
                    status: Some("aprovado".into()),
                    observacoes: Some("visita agendada".into()),
                },
            )
            .await?;
        assert_eq!(aprovada.status, StatusAdocao::Aprovado);
        assert_eq!(aprovada.observacoes.as_deref(), Some("visita agendada"));

        let pet = pets.get(pet_id).await?;
        assert!(!pet.disponivel);
        assert!(pet.data_adocao.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn rejeitar_nao_toca_no_pet() -> Result<(), anyhow::Error> {
        let store = store_temporario();
        let pet_id = cadastra_pet(&store, "Rex").await?;
        let pets = PetService::new(store.clone());
        let service = AdocaoService::new(store);

        let adocao = service.create(payload(pet_id)).await?;
        service
            .update(
                adocao.id,
                UpdateAdocaoPayload {
                    status: Some("rejeitado".into()),
                    observacoes: None,
                },
            )
            .await?;

        let pet = pets.get(pet_id).await?;
        assert!(pet.disponivel);
        assert!(pet.data_adocao.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn status_fora_do_conjunto_e_invalido() -> Result<(), anyhow::Error> {
        let store = store_temporario();
        let pet_id = cadastra_pet(&store, "Rex").await?;
        let service = AdocaoService::new(store);
        let adocao = service.create(payload(pet_id)).await?;

        assert!(matches!(
            service
                .update(
                    adocao.id,
                    UpdateAdocaoPayload {
                        status: Some("cancelado".into()),
                        observacoes: None,
                    },
                )
                .await,
            Err(AppError::InvalidStatus)
        ));
        // Sem status não há transição válida.
        assert!(matches!(
            service.update(adocao.id, UpdateAdocaoPayload::default()).await,
            Err(AppError::InvalidStatus)
        ));
        Ok(())
    }

    #[tokio::test]
    async fn filtra_por_status_pet_e_usuario() -> Result<(), anyhow::Error> {
        let store = store_temporario();
        let rex = cadastra_pet(&store, "Rex").await?;
        let bob = cadastra_pet(&store, "Bob").await?;
        let service = AdocaoService::new(store);

        let primeira = service
            .create(CreateAdocaoPayload {
                usuario_logado: Some(json!({ "id": 7, "nome": "Maria" })),
                ..payload(rex)
            })
            .await?;
        service.create(payload(bob)).await?;
        service
            .update(
                primeira.id,
                UpdateAdocaoPayload {
                    status: Some("aprovado".into()),
                    observacoes: None,
                },
            )
            .await?;

        let aprovadas = service
            .list(AdocaoFilter {
                status: Some("aprovado".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(aprovadas.len(), 1);
        assert_eq!(aprovadas[0].pet_id, rex);

        let do_usuario = service
            .list(AdocaoFilter {
                usuario_id: Some(7),
                ..Default::default()
            })
            .await?;
        assert_eq!(do_usuario.len(), 1);

        let do_bob = service
            .list(AdocaoFilter {
                pet_id: Some(bob),
                ..Default::default()
            })
            .await?;
        assert_eq!(do_bob.len(), 1);
        assert_eq!(do_bob[0].status, StatusAdocao::Pendente);
        Ok(())
    }
}
