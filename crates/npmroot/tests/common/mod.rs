//! Common test utilities.
//!
//! A command runner that answers from a fixed table and helpers to lay out
//! fake global installs on disk.

#![allow(dead_code)]

use npmroot::CommandRunner;
use npmroot_platform::command::stdout_text;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Replies with canned stdout per program; unknown programs fail to spawn.
#[derive(Debug, Default)]
pub struct FakeRunner {
    stdout: HashMap<String, String>,
    calls:  RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, program: &str, stdout: impl Into<String>) -> Self {
        self.stdout.insert(program.to_string(), stdout.into());
        self
    }

    /// Programs invoked so far, in order.
    pub fn calls(&self) -> Vec<String> { self.calls.borrow().clone() }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, _args: &[&str]) -> npmroot_platform::Result<Option<String>> {
        self.calls.borrow_mut().push(program.to_string());
        match self.stdout.get(program) {
            Some(out) => Ok(stdout_text(out.as_bytes())),
            None => Err(npmroot_platform::Error::CommandNotFound {
                cmd: program.to_string(),
            }),
        }
    }
}

/// Write `dir/package.json` declaring `name`.
pub fn install_package(dir: &Path, name: &str) {
    fs::create_dir_all(dir).expect("create package dir");
    let descriptor = serde_json::json!({ "name": name, "version": "2.0.0" });
    fs::write(dir.join("package.json"), descriptor.to_string()).expect("write package.json");
}
