pub mod adocoes;
pub mod auth;
pub mod doacoes;
pub mod estatisticas;
pub mod pets;
pub mod usuarios;
