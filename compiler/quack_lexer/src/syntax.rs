//! Scanner configuration.
//!
//! The spelling of the print and declare commands is owned by whoever
//! embeds the scanner; it arrives here as two strings and is validated once,
//! before any source is scanned.

use crate::handlers::identifier::{is_ident_continue, is_ident_start};

/// Spellings of the two configurable command keywords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxConfig {
    print_command: String,
    declare_command: String,
}

impl SyntaxConfig {
    /// Validate and build a configuration.
    ///
    /// Both keywords must be non-empty, shaped like identifiers, and
    /// different from each other.
    pub fn new(
        print_command: impl Into<String>,
        declare_command: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let print_command = print_command.into();
        let declare_command = declare_command.into();
        validate_keyword(&print_command, "print")?;
        validate_keyword(&declare_command, "declare")?;
        if print_command == declare_command {
            return Err(ConfigError::SameKeyword {
                keyword: print_command,
            });
        }
        Ok(SyntaxConfig {
            print_command,
            declare_command,
        })
    }

    pub fn print_command(&self) -> &str {
        &self.print_command
    }

    pub fn declare_command(&self) -> &str {
        &self.declare_command
    }
}

impl Default for SyntaxConfig {
    /// `quack` prints, `let` declares.
    fn default() -> Self {
        SyntaxConfig {
            print_command: "quack".to_string(),
            declare_command: "let".to_string(),
        }
    }
}

fn validate_keyword(keyword: &str, role: &'static str) -> Result<(), ConfigError> {
    let mut chars = keyword.chars();
    let Some(first) = chars.next() else {
        return Err(ConfigError::EmptyKeyword { role });
    };
    if !is_ident_start(first) || !chars.all(is_ident_continue) {
        return Err(ConfigError::NotAnIdentifier {
            role,
            keyword: keyword.to_string(),
        });
    }
    Ok(())
}

/// Rejected keyword configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("the {role} command keyword is empty")]
    EmptyKeyword { role: &'static str },
    #[error("the {role} command keyword `{keyword}` is not a valid identifier")]
    NotAnIdentifier { role: &'static str, keyword: String },
    #[error("`{keyword}` cannot be both the print and the declare command")]
    SameKeyword { keyword: String },
}

/// Per-scan switches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Emit `WHITESPACE` and `COMMENT` tokens instead of dropping them.
    pub retain_trivia: bool,
}

#[cfg(test)]
mod tests;
