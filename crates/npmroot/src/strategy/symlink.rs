//! POSIX symlinked executables.
//!
//! Only the link itself is read; a chain of links is whatever canonicalizing
//! the first target yields, and a dangling target is a soft failure.

use crate::attempt::{Attempt, SoftFailure, Strategy};
use crate::verify::verify;
use npmroot_platform::{CommandRunner, NODE_MODULES};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Follow a symlinked executable into the install tree it points at.
pub fn resolve<R: CommandRunner>(runner: &R, executable: &Path, package: &str) -> Attempt {
    let exe = executable.to_string_lossy().into_owned();
    let listing = match runner.run("ls", &["-l", exe.as_str()]) {
        Ok(Some(listing)) => listing,
        Ok(None) => return Attempt::NoMatch,
        Err(err) => return Attempt::Failed(SoftFailure::new(Strategy::Symlink, err)),
    };

    let Some(target) = link_target(&listing, &exe) else {
        return Attempt::NoMatch;
    };

    let linked = executable.parent().unwrap_or(Path::new("")).join(target);
    let real = match fs::canonicalize(&linked) {
        Ok(real) => real,
        Err(err) => {
            let message = format!("cannot resolve link target {}: {err}", linked.display());
            return Attempt::Failed(SoftFailure::new(Strategy::Symlink, message));
        }
    };

    let Some(candidate) = package_root(&real, package) else {
        debug!(target = %real.display(), "link target is outside any install tree");
        return Attempt::NoMatch;
    };
    debug!(candidate = %candidate.display(), "checking symlink install tree");
    verify(&candidate, package).into()
}

/// Target text of `<executable> -> <target>` in an `ls -l` listing.
pub fn link_target<'a>(listing: &'a str, executable: &str) -> Option<&'a str> {
    let pattern = format!(r"(?m){}\s+->\s+(.*?)$", regex::escape(executable));
    let re = Regex::new(&pattern).ok()?;
    re.captures(listing)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
        .filter(|target| !target.is_empty())
}

/// `real` cut right after its first `node_modules/<package>` segment.
pub fn package_root(real: &Path, package: &str) -> Option<PathBuf> {
    let text = real.to_string_lossy();
    let marker = format!("{NODE_MODULES}{}{package}", std::path::MAIN_SEPARATOR);
    let pattern = format!(r"^(.*?{})(?:[/\\]|$)", regex::escape(&marker));
    let re = Regex::new(&pattern).ok()?;
    re.captures(&text)
        .and_then(|caps| caps.get(1))
        .map(|m| PathBuf::from(m.as_str()))
}
