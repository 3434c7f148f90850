use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command as StdCommand, Output};
use tracing::debug;

/// Runs an external program and hands back what it printed.
///
/// `Ok(None)` means the program ran but wrote nothing to stdout, whatever its
/// exit status. `Err` is reserved for programs that could not be started.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Option<String>>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str]) -> Result<Option<String>> {
        (**self).run(program, args)
    }
}

/// Spawns real child processes, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Option<String>> {
        let resolved = which::which(program).map_err(|_| Error::CommandNotFound {
            cmd: program.to_string(),
        })?;
        debug!(program, ?args, path = %resolved.display(), "running command");

        let output = Command::new(program).program_path(resolved).args(args).capture()?;
        let stdout = stdout_text(&output.stdout);
        if stdout.is_none() {
            debug!(program, status = %output.status, "command produced no output");
        }
        Ok(stdout)
    }
}

/// Trimmed stdout, or `None` when there is nothing but whitespace.
pub fn stdout_text(stdout: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(stdout);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[derive(Debug)]
pub struct Command {
    inner:   StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    /// Spawn from an already located binary. Must be called before adding arguments.
    pub fn program_path(mut self, path: PathBuf) -> Self {
        self.inner = StdCommand::new(path);
        self
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn capture(mut self) -> Result<Output> {
        self.inner.output().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }
}
