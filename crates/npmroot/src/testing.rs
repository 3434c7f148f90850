//! Test doubles shared by the unit tests.

use npmroot_platform::{CommandRunner, Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
enum Response {
    Output(String),
    Silent,
}

/// Answers commands from a script instead of spawning processes.
///
/// Programs without a scripted response behave as if they were not installed.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, Response>,
    calls:     RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self { Self::default() }

    pub fn output(mut self, program: &str, stdout: &str) -> Self {
        self.responses
            .insert(program.to_string(), Response::Output(stdout.to_string()));
        self
    }

    pub fn silent(mut self, program: &str) -> Self {
        self.responses.insert(program.to_string(), Response::Silent);
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> { self.calls.borrow().clone() }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Option<String>> {
        self.calls.borrow_mut().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        match self.responses.get(program) {
            Some(Response::Output(stdout)) => Ok(npmroot_platform::command::stdout_text(stdout.as_bytes())),
            Some(Response::Silent) => Ok(None),
            None => Err(Error::CommandNotFound {
                cmd: program.to_string(),
            }),
        }
    }
}

/// Create `dir/package.json` declaring `name`.
pub fn write_package(dir: &Path, name: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("package.json"),
        format!(r#"{{"name":"{name}","version":"1.0.0"}}"#),
    )
    .unwrap();
}
