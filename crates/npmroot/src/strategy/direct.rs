use crate::attempt::Attempt;
use crate::verify::verify;
use std::path::Path;
use tracing::debug;

/// The executable sits in a `bin`-style directory right below the package root.
pub fn package_above(executable: &Path, package: &str) -> Attempt {
    let Some(root) = executable.parent().and_then(Path::parent) else {
        return Attempt::NoMatch;
    };
    debug!(candidate = %root.display(), "checking directory above executable");
    verify(root, package).into()
}
