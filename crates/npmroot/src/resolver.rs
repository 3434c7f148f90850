//! The resolution chain.
//!
//! With an executable name the search-path strategies run first, in a fixed
//! platform-dependent order; npm's configured prefix is the last resort. Every
//! strategy runs at most once per candidate and the first verified package wins.

use crate::attempt::{Attempt, Resolution, Strategy};
use crate::error::{Error, Result};
use crate::query::PackageQuery;
use crate::strategy::{direct, prefix, search, shim, symlink};
use crate::verify::VerifiedPackage;
use npmroot_platform::{CommandRunner, PlatformId, SystemRunner};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct Resolver<R = SystemRunner> {
    runner:   R,
    platform: Option<String>,
}

impl Resolver<SystemRunner> {
    pub fn new() -> Self { Self::default() }
}

impl<R: CommandRunner> Resolver<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            platform: None,
        }
    }

    /// Resolve as if running on `platform` instead of the host.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn runner(&self) -> &R { &self.runner }

    fn target_platform(&self) -> Result<PlatformId> {
        let id = self.platform.as_deref().unwrap_or(std::env::consts::OS);
        id.parse()
            .map_err(|_| Error::UnsupportedPlatform(id.to_string()))
    }

    /// Install directory of the queried package, or `None` when nothing verified.
    pub fn resolve(&self, query: &PackageQuery) -> Result<Option<PathBuf>> {
        self.trace(query).map(|resolution| resolution.path)
    }

    /// Like [`resolve`](Self::resolve), keeping every attempt made on the way.
    pub fn trace(&self, query: &PackageQuery) -> Result<Resolution> {
        let platform = self.target_platform()?;
        let package = query.package_name();
        debug!(%platform, package, executable = ?query.executable_name(), "resolving package");

        let mut resolution = Resolution::new(platform);
        let found = query.executable_name().and_then(|executable| {
            if platform.is_windows() {
                self.from_windows_shims(platform, executable, package, &mut resolution)
            } else {
                self.from_posix_link(platform, executable, package, &mut resolution)
            }
        });

        let found = found.or_else(|| {
            resolution.record(
                Strategy::NpmPrefix,
                prefix::locate(&self.runner, platform, package),
            )
        });

        resolution.path = found.map(|package| canonical(package.into_path_buf()));
        Ok(resolution)
    }

    fn search_hits(
        &self,
        platform: PlatformId,
        executable: &str,
        resolution: &mut Resolution,
    ) -> Vec<PathBuf> {
        match search::locate_executable(&self.runner, platform, executable) {
            Ok(hits) if hits.is_empty() => {
                resolution.record(Strategy::SearchPath, Attempt::NoMatch);
                hits
            }
            Ok(hits) => hits,
            Err(failure) => {
                resolution.record(Strategy::SearchPath, Attempt::Failed(failure));
                Vec::new()
            }
        }
    }

    fn from_windows_shims(
        &self,
        platform: PlatformId,
        executable: &str,
        package: &str,
        resolution: &mut Resolution,
    ) -> Option<VerifiedPackage> {
        for hit in self.search_hits(platform, executable, resolution) {
            let found = resolution
                .record(
                    Strategy::SiblingInstallTree,
                    shim::sibling_install_tree(&hit, package),
                )
                .or_else(|| resolution.record(Strategy::ShimContent, shim::shim_content(&hit, package)))
                .or_else(|| resolution.record(Strategy::DirectPath, direct::package_above(&hit, package)));
            if found.is_some() {
                return found;
            }
        }
        None
    }

    fn from_posix_link(
        &self,
        platform: PlatformId,
        executable: &str,
        package: &str,
        resolution: &mut Resolution,
    ) -> Option<VerifiedPackage> {
        let hit = self
            .search_hits(platform, executable, resolution)
            .into_iter()
            .next()?;

        resolution
            .record(
                Strategy::Symlink,
                symlink::resolve(&self.runner, &hit, package),
            )
            .or_else(|| resolution.record(Strategy::DirectPath, direct::package_above(&hit, package)))
    }
}

/// Real path of `path`; on failure the path is kept as found.
fn canonical(path: PathBuf) -> PathBuf {
    match fs::canonicalize(&path) {
        Ok(real) => simplify(real),
        Err(err) => {
            warn!(path = %path.display(), %err, "cannot canonicalize resolved path");
            path
        }
    }
}

/// Drop the `\\?\` prefix `canonicalize` puts on drive paths.
#[cfg(windows)]
fn simplify(path: PathBuf) -> PathBuf {
    let stripped = path
        .to_str()
        .and_then(|s| s.strip_prefix(r"\\?\"))
        .filter(|rest| rest.as_bytes().get(1) == Some(&b':'))
        .map(PathBuf::from);
    stripped.unwrap_or(path)
}

#[cfg(not(windows))]
fn simplify(path: PathBuf) -> PathBuf { path }

/// Resolve with the host platform and real processes.
pub fn resolve(package: &str, executable: Option<&str>) -> Result<Option<PathBuf>> {
    let mut query = PackageQuery::new(package);
    if let Some(executable) = executable {
        query = query.with_executable(executable);
    }
    Resolver::new().resolve(&query)
}
