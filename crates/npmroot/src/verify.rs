//! Package identity checks against `package.json`.

use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

pub const DESCRIPTOR_FILE: &str = "package.json";

/// The part of `package.json` used to identify a package.
///
/// Fields that are absent or not strings read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageDescriptor {
    #[serde(default, deserialize_with = "string_or_none")]
    pub name:    Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub version: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

/// A directory whose descriptor names the requested package.
///
/// Only [`verify`] creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedPackage(PathBuf);

impl VerifiedPackage {
    pub fn path(&self) -> &Path { &self.0 }

    pub fn into_path_buf(self) -> PathBuf { self.0 }

    /// Re-reads the descriptor; the package may have changed since verification.
    pub fn descriptor(&self) -> Option<PackageDescriptor> { read_descriptor(&self.0) }
}

/// Parse `dir/package.json`. Unreadable or malformed files yield `None`.
pub fn read_descriptor(dir: &Path) -> Option<PackageDescriptor> {
    let content = fs::read(dir.join(DESCRIPTOR_FILE)).ok()?;
    serde_json::from_slice(&content).ok()
}

/// Accept `candidate` iff its descriptor's `name` is exactly `package_name`.
pub fn verify(candidate: &Path, package_name: &str) -> Option<VerifiedPackage> {
    if !candidate.is_dir() {
        trace!(candidate = %candidate.display(), "rejected: not a directory");
        return None;
    }

    match read_descriptor(candidate) {
        Some(PackageDescriptor { name: Some(name), .. }) if name == package_name => {
            Some(VerifiedPackage(candidate.to_path_buf()))
        }
        Some(descriptor) => {
            trace!(candidate = %candidate.display(), found = ?descriptor.name, "rejected: name mismatch");
            None
        }
        None => None,
    }
}
