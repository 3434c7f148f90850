//! Platform conventions and process execution used by npmroot.

pub use command::{Command, CommandRunner, SystemRunner};
pub use error::{Error, Result};
pub use os::{NODE_MODULES, PlatformId, package_dir};

pub mod command;
mod error;
pub mod os;
