// src/common/validation.rs

/// Mesmo critério do padrão `^[^\s@]+@[^\s@]+\.[^\s@]+$`: uma única `@`,
/// nenhum espaço em branco e um ponto no domínio com algo dos dois lados.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut partes = email.split('@');
    match (partes.next(), partes.next(), partes.next()) {
        (Some(local), Some(dominio), None) if !local.is_empty() => {
            let bytes = dominio.as_bytes();
            bytes
                .iter()
                .enumerate()
                .any(|(i, b)| *b == b'.' && i > 0 && i + 1 < bytes.len())
        }
        _ => false,
    }
}

/// Remove `<` e `>` de campos de texto livre antes de persistir.
pub fn sanitize(texto: &str) -> String {
    texto.replace(['<', '>'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aceita_emails_simples() {
        assert!(is_valid_email("ana@x.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("nome.sobrenome@sub.dominio.br"));
    }

    #[test]
    fn rejeita_emails_invalidos() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("semarroba.com"));
        assert!(!is_valid_email("a@dominio"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn sanitize_remove_sinais_de_tag() {
        assert_eq!(sanitize("<script>alert(1)</script>"), "scriptalert(1)/script");
        assert_eq!(sanitize("Rex"), "Rex");
        assert_eq!(sanitize("3 > 2 < 4"), "3  2  4");
    }
}
