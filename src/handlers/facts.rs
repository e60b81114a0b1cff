//! Fixed-fact answers

/// Which fixed fact was asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactKind {
    Shakespeare,
    Name,
}

pub const SHAKESPEARE_BIO: &str = "William Shakespeare (26 April 1564 - 23 April 1616) was an \
English poet, playwright, and actor, widely regarded as the greatest writer in the English \
language and the world's pre-eminent dramatist.";

/// Answer a fact query; `name` is the configured name answer
pub fn answer(kind: FactKind, name: &str) -> String {
    match kind {
        FactKind::Shakespeare => SHAKESPEARE_BIO.to_string(),
        FactKind::Name => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shakespeare() {
        let answer = answer(FactKind::Shakespeare, "Rohan");
        assert!(answer.starts_with("William Shakespeare (26 April 1564"));
        assert!(answer.ends_with("pre-eminent dramatist."));
    }

    #[test]
    fn test_name_uses_configured_value() {
        assert_eq!(answer(FactKind::Name, "Rohan"), "Rohan");
        assert_eq!(answer(FactKind::Name, "Ada"), "Ada");
    }
}
