use crate::command::{ExitCode, Stdout};
use crate::env::Environment;
use anyhow::{Context, Result};
use log::debug;
use std::process::{ExitStatus, Stdio};

/// Command that is not a builtin.
///
/// The program is looked up by the operating system using the `PATH` of the
/// shell [`Environment`], not by [`crate::resolver`].
pub struct ExternalCommand {
    name: String,
    args: Vec<String>,
}

/// Result of trying to run an [`ExternalCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The child ran to completion with this status code.
    Exited(ExitCode),
    /// The program could not be started at all.
    NotFound,
}

impl ExternalCommand {
    pub fn new(name: String, args: Vec<String>) -> Self {
        Self { name, args }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Launches the program and blocks until it terminates.
    ///
    /// The child's stderr is always the shell's stderr. Its stdout is shared with
    /// `stdout` when possible, otherwise captured and copied into it after exit.
    /// Failing to spawn is reported as [`Outcome::NotFound`]; only errors writing
    /// the captured output back are returned as `Err`.
    ///
    /// The child inherits the process environment with the shell's `vars` layered
    /// on top, so variables the shell cannot represent are passed through untouched.
    pub fn execute(&self, stdout: &mut dyn Stdout, env: &Environment) -> Result<Outcome> {
        stdout.flush().context("flush shell output before spawn")?;

        let inherited = stdout.child_stdio();
        let capture = inherited.is_none();
        let spawned = std::process::Command::new(&self.name)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(inherited.unwrap_or_else(Stdio::piped))
            .stderr(Stdio::inherit())
            .envs(env.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(&env.current_dir)
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                debug!("failed to spawn {:?}: {}", self.name, e);
                return Ok(Outcome::NotFound);
            }
        };

        let status = if capture {
            let output = child
                .wait_with_output()
                .with_context(|| format!("wait for {}", self.name))?;
            stdout
                .write_all(&output.stdout)
                .context("forward child output")?;
            output.status
        } else {
            child.wait().with_context(|| format!("wait for {}", self.name))?
        };

        let code = status_code(status);
        debug!("{} exited with status {}", self.name, code);
        Ok(Outcome::Exited(code))
    }
}

fn status_code(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(x) => x,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> i32 {
    -1
}
