use super::*;
use pretty_assertions::assert_eq;

#[test]
fn accepts_identifier_keywords() {
    let config = SyntaxConfig::new("quack", "let");
    assert_eq!(config, Ok(SyntaxConfig::default()));
}

#[test]
fn keeps_custom_spellings() {
    let Ok(config) = SyntaxConfig::new("say_it", "var2") else {
        panic!("valid keywords rejected");
    };
    assert_eq!(config.print_command(), "say_it");
    assert_eq!(config.declare_command(), "var2");
}

#[test]
fn rejects_empty_keyword() {
    assert_eq!(
        SyntaxConfig::new("", "let"),
        Err(ConfigError::EmptyKeyword { role: "print" })
    );
    assert_eq!(
        SyntaxConfig::new("quack", ""),
        Err(ConfigError::EmptyKeyword { role: "declare" })
    );
}

#[test]
fn rejects_non_identifier_keyword() {
    assert_eq!(
        SyntaxConfig::new("print!", "let"),
        Err(ConfigError::NotAnIdentifier {
            role: "print",
            keyword: "print!".into()
        })
    );
    assert!(SyntaxConfig::new("quack", "1let").is_err());
}

#[test]
fn rejects_identical_keywords() {
    assert_eq!(
        SyntaxConfig::new("say", "say"),
        Err(ConfigError::SameKeyword {
            keyword: "say".into()
        })
    );
}

#[test]
fn unicode_keywords_are_identifiers() {
    assert!(SyntaxConfig::new("afficher", "soit_é").is_ok());
}

#[test]
fn trivia_is_dropped_by_default() {
    assert!(!ScanOptions::default().retain_trivia);
}
