use crate::command::{ExitCode, is_builtin};
use crate::env::Environment;
use crate::resolver::find_executable;
use anyhow::Result;
use std::io::Write;

/// Built-in commands known to the shell at compile time.
///
/// Builtins run in-process and write to the shell's own output stream.
pub(crate) trait BuiltinCommand {
    /// Canonical name of the command, e.g. "echo" or "type".
    fn name() -> &'static str;

    /// Executes the command using the provided output stream and environment.
    ///
    /// Return value follows shell conventions: 0 for success, non-zero for error.
    fn execute<W: Write + ?Sized>(
        self,
        stdout: &mut W,
        env: &mut Environment,
    ) -> Result<ExitCode>;
}

/// Leave the shell. Arguments are ignored and the status is always 0.
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute<W: Write + ?Sized>(
        self,
        _stdout: &mut W,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        env.should_exit = true;
        Ok(0)
    }
}

/// Write the arguments to standard output, separated by single spaces,
/// followed by a newline.
pub struct Echo {
    /// values to print as-is, separated by spaces.
    pub args: Vec<String>,
}

impl BuiltinCommand for Echo {
    fn name() -> &'static str {
        "echo"
    }

    fn execute<W: Write + ?Sized>(
        self,
        stdout: &mut W,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        writeln!(stdout, "{}", self.args.join(" "))?;
        Ok(0)
    }
}

/// Report how each name would be interpreted if used as a command.
pub struct Type {
    /// names to classify; nothing is printed when empty.
    pub names: Vec<String>,
}

impl Type {
    fn describe(name: &str, env: &Environment) -> (String, bool) {
        if is_builtin(name) {
            return (format!("{name} is a shell builtin"), true);
        }
        match find_executable(&env.search_path(), name) {
            Some(path) => (format!("{name} is {}", path.display()), true),
            None => (format!("{name}: not found"), false),
        }
    }
}

impl BuiltinCommand for Type {
    fn name() -> &'static str {
        "type"
    }

    fn execute<W: Write + ?Sized>(
        self,
        stdout: &mut W,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let mut code = 0;
        for name in &self.names {
            let (line, found) = Self::describe(name, env);
            writeln!(stdout, "{line}")?;
            if !found {
                code = 1;
            }
        }
        Ok(code)
    }
}
