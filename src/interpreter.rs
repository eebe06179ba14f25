use crate::builtin::{BuiltinCommand, Echo, Exit, Type};
use crate::command::{Command, ExitCode, Stdout};
use crate::env::Environment;
use crate::external::{ExternalCommand, Outcome};
use crate::lexer;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::{self, BufRead};

/// Text written before every read. No trailing newline.
pub const PROMPT: &str = "$ ";

/// A minimal shell-like interpreter that executes built-in and external commands.
///
/// The interpreter keeps an [`Environment`] between lines and reads commands one
/// line at a time until `exit` or the end of input.
///
/// Example
/// ```
/// use mini_shell::Interpreter;
/// let mut sh = Interpreter::default();
/// let mut out = Vec::new();
/// let code = sh.run_loop(&b"echo hello world\nexit\n"[..], &mut out);
/// assert_eq!(code, 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "$ hello world\n$ ");
/// ```
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// Create an interpreter around a prepared environment.
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Read-Eval-Print Loop over the process's standard input and output.
    pub fn repl(&mut self) -> ExitCode {
        let stdin = io::stdin().lock();
        let mut stdout = io::stdout();
        self.run_loop(stdin, &mut stdout)
    }

    /// Prompt, read, dispatch; repeat until `exit` or end of input.
    ///
    /// Returns the status the shell process should exit with, which is always 0.
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD; the line still runs.
    /// A failure of the input stream itself is treated like end of input.
    pub fn run_loop<R: BufRead, W: Stdout>(&mut self, mut input: R, out: &mut W) -> ExitCode {
        let mut buf = Vec::new();
        while !self.env.should_exit {
            if let Err(e) = prompt(out) {
                warn!("failed to write prompt: {e:#}");
            }

            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    debug!("end of input");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("failed to read command line: {e}");
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buf);
            if let Err(e) = self.execute_line(&line, out) {
                warn!("command failed: {e:#}");
            }
        }
        0
    }

    /// Tokenize and dispatch a single command line.
    ///
    /// Empty lines do nothing. Returns the status of the command that ran.
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Stdout) -> Result<ExitCode> {
        let tokens = lexer::split_into_tokens(line);
        debug!("tokens = {tokens:?}");
        let Some(command) = Command::classify(tokens) else {
            return Ok(0);
        };

        match command {
            Command::Exit => self.run_builtin(Exit, out),
            Command::Echo(args) => self.run_builtin(Echo { args }, out),
            Command::Type(names) => self.run_builtin(Type { names }, out),
            Command::External { name, args } => {
                let cmd = ExternalCommand::new(name, args);
                match cmd.execute(out, &self.env)? {
                    Outcome::Exited(code) => Ok(code),
                    Outcome::NotFound => {
                        writeln!(out, "{}: command not found", cmd.name())?;
                        Ok(127)
                    }
                }
            }
        }
    }

    fn run_builtin<T: BuiltinCommand>(
        &mut self,
        cmd: T,
        out: &mut dyn Stdout,
    ) -> Result<ExitCode> {
        debug!("running builtin {}", T::name());
        cmd.execute(out, &mut self.env)
            .with_context(|| format!("{}: write error", T::name()))
    }

    /// The environment the interpreter runs commands in.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Mutable access, e.g. to override `PATH` before running.
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }
}

impl Default for Interpreter {
    /// Create an interpreter over a snapshot of the current process environment.
    fn default() -> Self {
        Self::new(Environment::new())
    }
}

fn prompt(out: &mut dyn Stdout) -> Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush().context("flush prompt")?;
    Ok(())
}
