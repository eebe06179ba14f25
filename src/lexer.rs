//! A module implementing lexical analysis (tokenization) of one command line.
//!
//! The shell has no quoting, escaping or substitutions: a token is a maximal run
//! of non-whitespace characters. The first token names the command, the rest are
//! its arguments.

/// Splits `line` into whitespace-separated tokens.
///
/// Runs of whitespace (spaces, tabs, a trailing newline) act as a single separator
/// and never produce empty tokens. An empty or whitespace-only line yields an empty
/// vector.
pub fn split_into_tokens(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}
