use std::io::{self, Write};
use std::process::Stdio;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// Names handled by the shell itself. Fixed at compile time.
pub const BUILTINS: [&str; 3] = ["exit", "echo", "type"];

/// Returns true if `name` is one of [`BUILTINS`].
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// Abstraction over the shell's output stream that also tells how a spawned
/// child process should be wired to it.
///
/// `child_stdio` returns `Some` when the child can write to the same place
/// directly (the real terminal). `None` means the stream lives in memory: the
/// child's output is piped and copied into the writer once the child exits.
pub trait Stdout: Write {
    /// [`Stdio`] handle for the stdout of a child process, if it can be shared.
    fn child_stdio(&self) -> Option<Stdio>;
}

impl Stdout for io::Stdout {
    fn child_stdio(&self) -> Option<Stdio> {
        Some(Stdio::inherit())
    }
}

impl Stdout for Vec<u8> {
    fn child_stdio(&self) -> Option<Stdio> {
        None
    }
}

impl<T: Stdout + ?Sized> Stdout for &mut T {
    fn child_stdio(&self) -> Option<Stdio> {
        (**self).child_stdio()
    }
}

/// One dispatched command line, classified by its first token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `exit`, arguments ignored.
    Exit,
    /// `echo ARGS...`
    Echo(Vec<String>),
    /// `type NAMES...`
    Type(Vec<String>),
    /// Anything else: a program to launch.
    External { name: String, args: Vec<String> },
}

impl Command {
    /// Classifies a token sequence. Returns `None` for an empty sequence.
    pub fn classify(tokens: Vec<String>) -> Option<Self> {
        let mut tokens = tokens.into_iter();
        let name = tokens.next()?;
        let args: Vec<String> = tokens.collect();
        Some(match name.as_str() {
            "exit" => Command::Exit,
            "echo" => Command::Echo(args),
            "type" => Command::Type(args),
            _ => Command::External { name, args },
        })
    }
}
