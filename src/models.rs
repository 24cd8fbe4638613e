pub mod adocao;
pub mod doacao;
pub mod estatisticas;
pub mod pet;
pub mod usuario;
