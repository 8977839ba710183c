//! Command handlers for the Quack CLI.
//!
//! Each submodule implements one CLI command. Shared utilities like
//! `read_file` live here in the module root.

mod lex;

pub use lex::{lex_source, parse_lex_options};

/// Read a source file, exiting with a readable message on failure.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", read_error_message(path, &e));
            std::process::exit(1);
        }
    }
}

fn read_error_message(path: &str, e: &std::io::Error) -> String {
    match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Error, ErrorKind};

    #[test]
    fn read_errors_name_the_file() {
        let missing = Error::from(ErrorKind::NotFound);
        assert_eq!(read_error_message("a.qk", &missing), "cannot find file 'a.qk'");

        let binary = Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        assert_eq!(read_error_message("b.qk", &binary), "'b.qk' contains invalid UTF-8 data");

        let other = Error::other("disk on fire");
        assert_eq!(read_error_message("c.qk", &other), "error reading 'c.qk': disk on fire");
    }
}
