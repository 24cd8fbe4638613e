// src/services/pet_service.rs

use chrono::Utc;

use crate::{
    common::{error::AppError, validation::sanitize},
    db::store::{JsonStore, next_id},
    models::pet::{CreatePetPayload, Pet, PetFilter, UpdatePetPayload},
};

#[derive(Clone)]
pub struct PetService {
    store: JsonStore,
}

impl PetService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    // Varredura completa com os filtros combinados por E lógico.
    pub async fn list(&self, filtro: PetFilter) -> Result<Vec<Pet>, AppError> {
        let db = self.store.read().await?;
        let mut pets = db.pets;

        if let Some(tipo) = &filtro.tipo {
            let tipo = tipo.to_lowercase();
            pets.retain(|p| p.tipo.to_lowercase() == tipo);
        }
        if let Some(idade) = filtro.idade {
            pets.retain(|p| p.idade == Some(idade));
        }
        if let Some(local) = &filtro.local {
            let local = local.to_lowercase();
            pets.retain(|p| p.local.to_lowercase().contains(&local));
        }
        if let Some(disponivel) = filtro.disponivel {
            pets.retain(|p| p.disponivel == disponivel);
        }

        Ok(pets)
    }

    pub async fn get(&self, id: i64) -> Result<Pet, AppError> {
        let db = self.store.read().await?;
        db.pets
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(AppError::PetNotFound)
    }

    pub async fn create(&self, payload: CreatePetPayload) -> Result<Pet, AppError> {
        self.store
            .update(move |db| {
                let pet = Pet {
                    id: next_id(db.pets.iter().map(|p| p.id)),
                    nome: sanitize(&payload.nome),
                    tipo: sanitize(&payload.tipo),
                    idade: payload.idade,
                    descricao: sanitize(payload.descricao.as_deref().unwrap_or_default()),
                    raca: sanitize(payload.raca.as_deref().unwrap_or_default()),
                    local: sanitize(payload.local.as_deref().unwrap_or_default()),
                    contato: sanitize(payload.contato.as_deref().unwrap_or_default()),
                    imagem: payload.imagem.unwrap_or_default(),
                    usuario_id: payload.usuario_id,
                    disponivel: true,
                    data_cadastro: Utc::now(),
                    data_adocao: None,
                    data_atualizacao: None,
                };
                db.pets.push(pet.clone());
                Ok(pet)
            })
            .await
    }

    pub async fn update(&self, id: i64, payload: UpdatePetPayload) -> Result<Pet, AppError> {
        self.store
            .update(move |db| {
                let pet = db
                    .pets
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or(AppError::PetNotFound)?;

                if let Some(nome) = payload.nome {
                    pet.nome = sanitize(&nome);
                }
                if let Some(tipo) = payload.tipo {
                    pet.tipo = sanitize(&tipo);
                }
                if payload.idade.is_some() {
                    pet.idade = payload.idade;
                }
                if let Some(descricao) = payload.descricao {
                    pet.descricao = sanitize(&descricao);
                }
                if let Some(raca) = payload.raca {
                    pet.raca = sanitize(&raca);
                }
                if let Some(local) = payload.local {
                    pet.local = sanitize(&local);
                }
                if let Some(contato) = payload.contato {
                    pet.contato = sanitize(&contato);
                }
                if let Some(imagem) = payload.imagem {
                    pet.imagem = imagem;
                }
                if let Some(disponivel) = payload.disponivel {
                    pet.disponivel = disponivel;
                }
                pet.data_atualizacao = Some(Utc::now());

                Ok(pet.clone())
            })
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<Pet, AppError> {
        self.store
            .update(move |db| {
                let pos = db
                    .pets
                    .iter()
                    .position(|p| p.id == id)
                    .ok_or(AppError::PetNotFound)?;
                Ok(db.pets.remove(pos))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_temporario() -> JsonStore {
        let caminho =
            std::env::temp_dir().join(format!("unipet_pets_{}.json", uuid::Uuid::new_v4()));
        JsonStore::new(caminho)
    }

    fn payload(nome: &str, tipo: &str, local: &str) -> CreatePetPayload {
        CreatePetPayload {
            nome: nome.into(),
            tipo: tipo.into(),
            idade: None,
            descricao: None,
            raca: None,
            local: Some(local.into()),
            contato: None,
            imagem: None,
            usuario_id: None,
        }
    }

    #[tokio::test]
    async fn create_entra_disponivel_e_sanitizado() -> Result<(), anyhow::Error> {
        let service = PetService::new(store_temporario());

        let pet = service
            .create(CreatePetPayload {
                descricao: Some("<b>dócil</b>".into()),
                ..payload("Rex", "cachorro", "São Paulo")
            })
            .await?;
        assert_eq!(pet.id, 1);
        assert!(pet.disponivel);
        assert_eq!(pet.descricao, "bdócil/b");
        assert!(pet.data_adocao.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn filtro_por_tipo_ignora_caixa() -> Result<(), anyhow::Error> {
        let service = PetService::new(store_temporario());
        service.create(payload("Rex", "cachorro", "São Paulo")).await?;
        service.create(payload("Mimi", "Gato", "Campinas")).await?;
        service.create(payload("Bob", "CACHORRO", "Santos")).await?;

        let cachorros = service
            .list(PetFilter {
                tipo: Some("Cachorro".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(cachorros.len(), 2);
        assert!(cachorros.iter().all(|p| p.tipo.to_lowercase() == "cachorro"));
        Ok(())
    }

    #[tokio::test]
    async fn filtros_combinam_com_e_logico() -> Result<(), anyhow::Error> {
        let service = PetService::new(store_temporario());
        service.create(payload("Rex", "cachorro", "São Paulo")).await?;
        service.create(payload("Bob", "cachorro", "Santos")).await?;

        // Substring do local, sem diferenciar caixa.
        let em_sao_paulo = service
            .list(PetFilter {
                tipo: Some("cachorro".into()),
                local: Some("são".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(em_sao_paulo.len(), 1);
        assert_eq!(em_sao_paulo[0].nome, "Rex");

        let indisponiveis = service
            .list(PetFilter {
                disponivel: Some(false),
                ..Default::default()
            })
            .await?;
        assert!(indisponiveis.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_sobrepoe_somente_os_campos_presentes() -> Result<(), anyhow::Error> {
        let service = PetService::new(store_temporario());
        let pet = service.create(payload("Rex", "cachorro", "São Paulo")).await?;

        let atualizado = service
            .update(
                pet.id,
                UpdatePetPayload {
                    idade: Some(3),
                    disponivel: Some(false),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(atualizado.nome, "Rex");
        assert_eq!(atualizado.idade, Some(3));
        assert!(!atualizado.disponivel);
        assert!(atualizado.data_atualizacao.is_some());

        // Sobreposição vazia não muda valor nenhum.
        let sem_mudanca = service.update(pet.id, UpdatePetPayload::default()).await?;
        assert_eq!(sem_mudanca.idade, Some(3));
        assert!(!sem_mudanca.disponivel);
        Ok(())
    }

    #[tokio::test]
    async fn get_e_delete_inexistentes_devolvem_not_found() {
        let service = PetService::new(store_temporario());
        assert!(matches!(service.get(1).await, Err(AppError::PetNotFound)));
        assert!(matches!(service.delete(1).await, Err(AppError::PetNotFound)));
    }
}
