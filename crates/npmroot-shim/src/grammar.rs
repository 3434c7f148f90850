//! Ordered extraction rules for npm command shims.
//!
//! A shim forwards to a script somewhere below the shim's own directory,
//! written relative to the `%~dp0` token (or `%dp0%` in newer shims).
//! Rules are tried in [`ShimRule::ORDER`]; the first rule that matches
//! decides the candidate and no later rule is consulted.

use crate::error::{Error, Result};
use crate::path::expand_fragment;
use npmroot_platform::package_dir;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Up to the last `node_modules` marker before the closing quote.
static INSTALL_TREE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"((?:%~dp0|%dp0%)[\w\\.-]+node_modules).*?['"]"#)
        .expect("install tree shim pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShimRule {
    /// Generic marker: the fragment names the install tree, the package is joined on.
    InstallTree,
    /// Anchored on the package name: the fragment is the package root itself.
    PackageAnchor,
}

impl ShimRule {
    pub const ORDER: [ShimRule; 2] = [ShimRule::InstallTree, ShimRule::PackageAnchor];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimMatch {
    pub rule:     ShimRule,
    pub fragment: String,
}

impl ShimMatch {
    /// Expand the fragment against the shim's directory into a package root candidate.
    pub fn candidate(&self, shim_dir: &Path, package: &str) -> PathBuf {
        let base = expand_fragment(shim_dir, &self.fragment);
        match self.rule {
            ShimRule::InstallTree => package_dir(base, package),
            ShimRule::PackageAnchor => base,
        }
    }
}

/// The shim rules instantiated for one package name.
#[derive(Debug, Clone)]
pub struct ShimGrammar {
    package: String,
    anchor:  Regex,
}

impl ShimGrammar {
    pub fn for_package(package: &str) -> Result<Self> {
        // Scoped names live in nested directories; shims spell them with `\`.
        let name = regex::escape(&package.replace('/', "\\"));
        let pattern = format!(r#"((?:%~dp0|%dp0%)[\w\\.-]+?{name})(?:\\|'|")"#);
        let anchor = Regex::new(&pattern).map_err(|source| Error::InvalidPattern {
            package: package.to_string(),
            source,
        })?;

        Ok(Self {
            package: package.to_string(),
            anchor,
        })
    }

    pub fn package(&self) -> &str { &self.package }

    fn pattern(&self, rule: ShimRule) -> &Regex {
        match rule {
            ShimRule::InstallTree => &INSTALL_TREE,
            ShimRule::PackageAnchor => &self.anchor,
        }
    }

    /// First rule match in [`ShimRule::ORDER`].
    pub fn extract(&self, content: &str) -> Option<ShimMatch> {
        ShimRule::ORDER.into_iter().find_map(|rule| {
            self.pattern(rule)
                .captures(content)
                .and_then(|caps| caps.get(1))
                .map(|m| ShimMatch {
                    rule,
                    fragment: m.as_str().to_string(),
                })
        })
    }

    /// Candidate package root named by a shim's content, if any rule matches.
    pub fn candidate(&self, shim_path: &Path, content: &str) -> Option<PathBuf> {
        let shim_dir = shim_path.parent().unwrap_or(Path::new(""));
        self.extract(content)
            .map(|m| m.candidate(shim_dir, &self.package))
    }
}
