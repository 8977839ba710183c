//! `lex`: tokenize a file and print the token stream.

use quack_lexer::{
    ExternalToken, LexError, ScanOptions, Scanner, SourceId, SyntaxConfig, Token, TokenValue,
};

use super::read_file;

/// Environment variable consulted when `--print-command` is absent.
const PRINT_COMMAND_VAR: &str = "QUACK_PRINT_COMMAND";
/// Environment variable consulted when `--declare-command` is absent.
const DECLARE_COMMAND_VAR: &str = "QUACK_DECLARE_COMMAND";

/// Name shown in positions when the demo program is lexed.
const DEMO_NAME: &str = "<demo>";

/// Program lexed when no file is given.
const DEMO_SOURCE: &str = r#"
# Variable declarations and assignments
quack("Hello")
let my_count = ((( 7 + my_idea ) * 7437 + 949) == 84)
if (x = 10):
    y = x + 20 * 3
    if (a == b):
        quack(90)
"#;

/// Parsed `quack lex` arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub path: Option<String>,
    pub json: bool,
    pub trivia: bool,
    pub print_command: Option<String>,
    pub declare_command: Option<String>,
}

/// Parse the arguments after `lex`. Flags may come before or after the path.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();
    for arg in args {
        if arg == "--json" {
            options.json = true;
        } else if arg == "--trivia" {
            options.trivia = true;
        } else if let Some(word) = arg.strip_prefix("--print-command=") {
            options.print_command = Some(word.to_string());
        } else if let Some(word) = arg.strip_prefix("--declare-command=") {
            options.declare_command = Some(word.to_string());
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if options.path.is_none() {
            options.path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }
    Ok(options)
}

/// Lex the requested file (or the demo program) and print its tokens.
pub fn lex_source(options: &LexOptions) {
    let (source, filename) = match &options.path {
        Some(path) => (read_file(path), path.as_str()),
        None => (DEMO_SOURCE.to_string(), DEMO_NAME),
    };
    let (print_command, declare_command) =
        resolve_keywords(options, |name| std::env::var(name).ok());

    let tokens = match scan(&source, filename, &print_command, &declare_command, options.trivia) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if options.json {
        match render_json(&tokens) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: cannot serialize tokens: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_table(&tokens));
    }
}

/// Keyword spellings: flag first, then environment, then the defaults.
fn resolve_keywords(
    options: &LexOptions,
    env: impl Fn(&str) -> Option<String>,
) -> (String, String) {
    let defaults = SyntaxConfig::default();
    let print_command = options
        .print_command
        .clone()
        .or_else(|| env(PRINT_COMMAND_VAR))
        .unwrap_or_else(|| defaults.print_command().to_string());
    let declare_command = options
        .declare_command
        .clone()
        .or_else(|| env(DECLARE_COMMAND_VAR))
        .unwrap_or_else(|| defaults.declare_command().to_string());
    (print_command, declare_command)
}

fn scan(
    source: &str,
    filename: &str,
    print_command: &str,
    declare_command: &str,
    retain_trivia: bool,
) -> Result<Vec<Token>, LexError> {
    let config = SyntaxConfig::new(print_command, declare_command)
        .map_err(|e| LexError::configuration(e, SourceId::new(filename)))?;
    Scanner::new(config)
        .with_options(ScanOptions { retain_trivia })
        .tokenize(source, Some(filename))
}

/// Fixed-width table: kind, value, byte offset.
fn render_table(tokens: &[Token]) -> String {
    let mut out = format!("{:<25} {:<30} {}\n", "Token Type", "Value", "Position");
    out.push_str(&"=".repeat(80));
    out.push('\n');
    for token in tokens {
        let value = display_value(&token.value);
        out.push_str(&format!(
            "{:<25} {value:<30} {}\n",
            token.kind.name(),
            token.start.index
        ));
    }
    out
}

/// Values with line breaks or other control characters are shown quoted.
fn display_value(value: &TokenValue) -> String {
    let text = value.to_string();
    if text.contains(char::is_control) {
        format!("{text:?}")
    } else {
        text
    }
}

fn render_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    let external: Vec<ExternalToken> = tokens.iter().map(Token::to_external).collect();
    serde_json::to_string_pretty(&external)
}
