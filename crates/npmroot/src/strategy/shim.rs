//! Windows shim strategies.

use crate::attempt::{Attempt, SoftFailure, Strategy};
use crate::verify::verify;
use npmroot_platform::{NODE_MODULES, package_dir};
use npmroot_shim::ShimGrammar;
use std::fs;
use std::path::Path;
use tracing::debug;

/// npm keeps global packages in `node_modules` next to the shims on Windows.
pub fn sibling_install_tree(shim: &Path, package: &str) -> Attempt {
    let Some(dir) = shim.parent() else {
        return Attempt::NoMatch;
    };
    let candidate = package_dir(dir.join(NODE_MODULES), package);
    debug!(candidate = %candidate.display(), "checking install tree beside shim");
    verify(&candidate, package).into()
}

/// Follow the path the shim forwards to.
pub fn shim_content(shim: &Path, package: &str) -> Attempt {
    if !shim.is_file() {
        return Attempt::NoMatch;
    }

    let content = match fs::read(shim) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            let message = format!("cannot read {}: {err}", shim.display());
            return Attempt::Failed(SoftFailure::new(Strategy::ShimContent, message));
        }
    };

    let grammar = match ShimGrammar::for_package(package) {
        Ok(grammar) => grammar,
        Err(err) => return Attempt::Failed(SoftFailure::new(Strategy::ShimContent, err)),
    };

    let Some(candidate) = grammar.candidate(shim, &content) else {
        return Attempt::NoMatch;
    };
    debug!(candidate = %candidate.display(), shim = %shim.display(), "checking path named by shim");
    verify(&candidate, package).into()
}
