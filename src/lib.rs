//! A tiny interactive command interpreter.
//!
//! Each line read from standard input is split on whitespace. The first word is
//! either one of the builtins `exit`, `echo` and `type`, or the name of a program
//! that is launched with the shell's standard output and error. The loop ends on
//! `exit` or at the end of input, both with status 0.
//!
//! The main entry point is [`Interpreter`]. The public modules expose the pieces it
//! is built from: [`lexer`] for tokenization, [`resolver`] for search path lookups,
//! [`env`] for the environment snapshot and [`command`] for command classification.

mod builtin;
pub mod command;
pub mod config;
pub mod env;
mod external;
mod interpreter;
pub mod lexer;
pub mod resolver;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{Interpreter, PROMPT};
