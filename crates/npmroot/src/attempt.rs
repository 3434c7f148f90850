//! Outcomes of individual resolution strategies.

use crate::verify::VerifiedPackage;
use npmroot_platform::PlatformId;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Executable lookup on the search path (`where`/`which`).
    SearchPath,
    /// `<shim dir>/node_modules/<package>` next to a Windows shim.
    SiblingInstallTree,
    /// Path parsed out of a Windows shim's content.
    ShimContent,
    /// Target of a symlinked executable.
    Symlink,
    /// Package root one level above the executable's directory.
    DirectPath,
    /// `npm config get prefix`.
    NpmPrefix,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::SearchPath => "search-path",
            Strategy::SiblingInstallTree => "sibling-install-tree",
            Strategy::ShimContent => "shim-content",
            Strategy::Symlink => "symlink",
            Strategy::DirectPath => "direct-path",
            Strategy::NpmPrefix => "npm-prefix",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A strategy error that was absorbed so the next strategy can run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftFailure {
    pub strategy: Strategy,
    pub message:  String,
}

impl SoftFailure {
    pub fn new(strategy: Strategy, message: impl fmt::Display) -> Self {
        Self {
            strategy,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for SoftFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.strategy, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Found(VerifiedPackage),
    NoMatch,
    Failed(SoftFailure),
}

impl Attempt {
    pub fn is_found(&self) -> bool { matches!(self, Attempt::Found(_)) }

    pub fn found(self) -> Option<VerifiedPackage> {
        match self {
            Attempt::Found(package) => Some(package),
            Attempt::NoMatch | Attempt::Failed(_) => None,
        }
    }
}

impl From<Option<VerifiedPackage>> for Attempt {
    fn from(value: Option<VerifiedPackage>) -> Self {
        value.map_or(Attempt::NoMatch, Attempt::Found)
    }
}

/// Everything a resolution tried, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub platform: PlatformId,
    pub path:     Option<PathBuf>,
    pub attempts: Vec<(Strategy, Attempt)>,
}

impl Resolution {
    pub(crate) fn new(platform: PlatformId) -> Self {
        Self {
            platform,
            path: None,
            attempts: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, strategy: Strategy, attempt: Attempt) -> Option<VerifiedPackage> {
        let found = match &attempt {
            Attempt::Found(package) => {
                debug!(%strategy, path = %package.path().display(), "package found");
                Some(package.clone())
            }
            Attempt::NoMatch => {
                debug!(%strategy, "no match");
                None
            }
            Attempt::Failed(failure) => {
                warn!(%strategy, "{}", failure.message);
                None
            }
        };
        self.attempts.push((strategy, attempt));
        found
    }

    pub fn strategies(&self) -> Vec<Strategy> { self.attempts.iter().map(|(s, _)| *s).collect() }

    pub fn failures(&self) -> impl Iterator<Item = &SoftFailure> {
        self.attempts.iter().filter_map(|(_, attempt)| match attempt {
            Attempt::Failed(failure) => Some(failure),
            Attempt::Found(_) | Attempt::NoMatch => None,
        })
    }
}
