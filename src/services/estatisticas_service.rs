// src/services/estatisticas_service.rs

use std::collections::BTreeMap;

use crate::{
    common::error::AppError,
    db::store::JsonStore,
    models::{
        adocao::StatusAdocao,
        estatisticas::{
            Estatisticas, EstatisticasAdocoes, EstatisticasDoacoes, EstatisticasPets,
            EstatisticasUsuarios,
        },
    },
};

#[derive(Clone)]
pub struct EstatisticasService {
    store: JsonStore,
}

impl EstatisticasService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn coletar(&self) -> Result<Estatisticas, AppError> {
        let db = self.store.read().await?;

        let mut pets_por_tipo: BTreeMap<String, usize> = BTreeMap::new();
        for pet in &db.pets {
            *pets_por_tipo.entry(pet.tipo.clone()).or_insert(0) += 1;
        }

        let mut doacoes_por_tipo: BTreeMap<String, usize> = BTreeMap::new();
        for doacao in &db.doacoes {
            *doacoes_por_tipo.entry(doacao.tipo.clone()).or_insert(0) += 1;
        }

        let contagem_status = |status: StatusAdocao| {
            db.adocoes.iter().filter(|a| a.status == status).count()
        };

        Ok(Estatisticas {
            usuarios: EstatisticasUsuarios {
                total: db.usuarios.len(),
                admins: db.usuarios.iter().filter(|u| u.admin).count(),
            },
            pets: EstatisticasPets {
                total: db.pets.len(),
                disponiveis: db.pets.iter().filter(|p| p.disponivel).count(),
                adotados: db.pets.iter().filter(|p| !p.disponivel).count(),
                por_tipo: pets_por_tipo,
            },
            adocoes: EstatisticasAdocoes {
                total: db.adocoes.len(),
                pendentes: contagem_status(StatusAdocao::Pendente),
                aprovadas: contagem_status(StatusAdocao::Aprovado),
                rejeitadas: contagem_status(StatusAdocao::Rejeitado),
            },
            doacoes: EstatisticasDoacoes {
                total: db.doacoes.len(),
                por_tipo: doacoes_por_tipo,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{
            adocao::{Adotante, CreateAdocaoPayload, UpdateAdocaoPayload},
            pet::CreatePetPayload,
        },
        services::{AdocaoService, PetService},
    };

    fn store_temporario() -> JsonStore {
        let caminho = std::env::temp_dir()
            .join(format!("unipet_estatisticas_{}.json", uuid::Uuid::new_v4()));
        JsonStore::new(caminho)
    }

    fn pet(nome: &str, tipo: &str) -> CreatePetPayload {
        CreatePetPayload {
            nome: nome.into(),
            tipo: tipo.into(),
            idade: None,
            descricao: None,
            raca: None,
            local: None,
            contato: None,
            imagem: None,
            usuario_id: None,
        }
    }

    #[tokio::test]
    async fn conta_por_colecao_e_por_tipo() -> Result<(), anyhow::Error> {
        let store = store_temporario();
        let pets = PetService::new(store.clone());
        let adocoes = AdocaoService::new(store.clone());
        let service = EstatisticasService::new(store);

        let rex = pets.create(pet("Rex", "cachorro")).await?;
        pets.create(pet("Bob", "cachorro")).await?;
        pets.create(pet("Mimi", "gato")).await?;

        let solicitacao = adocoes
            .create(CreateAdocaoPayload {
                pet_id: Some(rex.id),
                pet_nome: None,
                adotante: Some(Adotante {
                    nome: "Maria Souza".into(),
                    email: "maria@x.com".into(),
                    telefone: "11999990000".into(),
                    cpf: "12345678900".into(),
                    endereco: String::new(),
                    experiencia: String::new(),
                    motivacao: String::new(),
                }),
                usuario_logado: None,
            })
            .await?;
        adocoes
            .update(
                solicitacao.id,
                UpdateAdocaoPayload {
                    status: Some("aprovado".into()),
                    observacoes: None,
                },
            )
            .await?;

        let stats = service.coletar().await?;
        assert_eq!(stats.pets.total, 3);
        assert_eq!(stats.pets.disponiveis, 2);
        assert_eq!(stats.pets.adotados, 1);
        assert_eq!(stats.pets.por_tipo.get("cachorro"), Some(&2));
        assert_eq!(stats.pets.por_tipo.get("gato"), Some(&1));
        assert_eq!(stats.adocoes.total, 1);
        assert_eq!(stats.adocoes.aprovadas, 1);
        assert_eq!(stats.adocoes.pendentes, 0);
        assert_eq!(stats.usuarios.total, 0);
        assert_eq!(stats.doacoes.total, 0);
        Ok(())
    }
}
