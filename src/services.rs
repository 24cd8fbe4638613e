pub mod usuario_service;
pub use usuario_service::UsuarioService;
pub mod pet_service;
pub use pet_service::PetService;
pub mod adocao_service;
pub use adocao_service::AdocaoService;
pub mod doacao_service;
pub use doacao_service::DoacaoService;
pub mod estatisticas_service;
pub use estatisticas_service::EstatisticasService;
