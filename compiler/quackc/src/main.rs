//! Quack CLI
//!
//! Dumps the token stream the scanner produces for a Quack program.

mod commands;

use commands::{lex_source, parse_lex_options};
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a subscriber when `RUST_LOG` is set.
///
/// `RUST_LOG=quack_lexer=trace` logs every handler dispatch. With
/// `QUACK_LOG_TREE` also set, spans are rendered as an indented tree.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var_os("QUACK_LOG_TREE").is_some();
        let tree_layer = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr)
        });
        let fmt_layer = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });
        tracing_subscriber::registry()
            .with(filter)
            .with(tree_layer)
            .with(fmt_layer)
            .init();
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let options = match parse_lex_options(&args[2..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: quack lex [file.qk] [--json] [--trivia]");
                    std::process::exit(1);
                }
            };
            lex_source(&options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Quack {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Quack scanner");
    println!();
    println!("Usage: quack <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex [file.qk]        Tokenize a file (default: built-in demo program)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --json                    Print tokens as a JSON array");
    println!("  --trivia                  Keep whitespace and comment tokens");
    println!("  --print-command=<word>    Print keyword (default: quack)");
    println!("  --declare-command=<word>  Declare keyword (default: let)");
    println!();
    println!("Environment:");
    println!("  QUACK_PRINT_COMMAND         Print keyword when no flag is given");
    println!("  QUACK_DECLARE_COMMAND       Declare keyword when no flag is given");
    println!("  RUST_LOG=quack_lexer=trace  Log every handler dispatch to stderr");
    println!("  QUACK_LOG_TREE=1            Render log spans as a tree");
    println!();
    println!("Examples:");
    println!("  quack lex");
    println!("  quack lex main.qk --json");
    println!("  quack lex main.qk --print-command=honk --declare-command=var");
}
