//! Runtime configuration read from environment variables.
//!
//! | Variable            | Values           | Default |
//! |---------------------|------------------|---------|
//! | `BOOK_ON_MALFORMED` | `skip`, `abort`  | `skip`  |
//! | `BOOK_PRINT`        | `true`, `false`  | `true`  |
//! | `BOOK_HTTP_PORT`    | port number      | unset   |
//! | `BOOK_INPUT`        | file path        | stdin   |
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;

/// What the stream driver does with a line that cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Log at `warn` and continue with the next line.
    #[default]
    Skip,
    /// Stop the stream and return the error.
    Abort,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub on_malformed: MalformedPolicy,
    /// Write the rendered book after every processed instruction.
    pub print_book: bool,
    /// When set, serve HTTP on this port instead of reading a stream.
    pub http_port: Option<u16>,
    /// Stream input file; stdin when `None`.
    pub input: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            on_malformed: MalformedPolicy::Skip,
            print_book: true,
            http_port: None,
            input: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let on_malformed = match lookup("BOOK_ON_MALFORMED").as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("abort") => MalformedPolicy::Abort,
            Some(v) if v.eq_ignore_ascii_case("skip") => MalformedPolicy::Skip,
            _ => defaults.on_malformed,
        };
        let print_book = lookup("BOOK_PRINT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.print_book);
        let http_port = lookup("BOOK_HTTP_PORT").and_then(|s| s.trim().parse().ok());
        let input = lookup("BOOK_INPUT")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        Self {
            on_malformed,
            print_book,
            http_port,
            input,
        }
    }
}
