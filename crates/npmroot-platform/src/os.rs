//! Host platform identification and the npm layout conventions tied to it.

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const NODE_MODULES: &str = "node_modules";

/// Platforms npm global installs are resolved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformId {
    Windows,
    Linux,
    Macos,
}

impl PlatformId {
    pub const ALL: [PlatformId; 3] = [PlatformId::Windows, PlatformId::Linux, PlatformId::Macos];

    /// Detect the platform this process was built for.
    pub fn detect() -> Result<Self> { std::env::consts::OS.parse() }

    pub fn is_windows(self) -> bool { self == PlatformId::Windows }

    pub fn as_str(self) -> &'static str {
        match self {
            PlatformId::Windows => "windows",
            PlatformId::Linux => "linux",
            PlatformId::Macos => "macos",
        }
    }

    /// Name of the npm binary to invoke.
    pub fn npm_executable(self) -> &'static str {
        match self {
            PlatformId::Windows => "npm.cmd",
            PlatformId::Linux | PlatformId::Macos => "npm",
        }
    }

    /// Command that looks an executable up on the search path.
    pub fn search_command(self) -> &'static str {
        match self {
            PlatformId::Windows => "where",
            PlatformId::Linux | PlatformId::Macos => "which",
        }
    }

    /// Directory holding global packages below an npm prefix.
    ///
    /// - Windows: `<prefix>/node_modules`
    /// - others: `<prefix>/lib/node_modules`
    pub fn install_tree(self, prefix: impl AsRef<Path>) -> PathBuf {
        let prefix = prefix.as_ref();
        match self {
            PlatformId::Windows => prefix.join(NODE_MODULES),
            PlatformId::Linux | PlatformId::Macos => prefix.join("lib").join(NODE_MODULES),
        }
    }
}

/// Directory of `package` below `base`, splitting scoped names into their directories.
pub fn package_dir(base: impl AsRef<Path>, package: &str) -> PathBuf {
    package
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(base.as_ref().to_path_buf(), |path, segment| path.join(segment))
}

impl FromStr for PlatformId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "windows" | "win32" => Ok(PlatformId::Windows),
            "linux" => Ok(PlatformId::Linux),
            "macos" | "darwin" => Ok(PlatformId::Macos),
            other => Err(Error::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}
