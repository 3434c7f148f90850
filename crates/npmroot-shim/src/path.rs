use std::path::{Path, PathBuf};

/// Tokens cmd expands to the shim's own directory.
pub const DIR_TOKENS: [&str; 2] = ["%~dp0", "%dp0%"];

/// Substitute the directory token with `shim_dir` and normalize lexically.
///
/// Both `\` and `/` separate segments, `.` is dropped and `..` pops one level.
/// Nothing is looked up on disk.
pub fn expand_fragment(shim_dir: &Path, fragment: &str) -> PathBuf {
    let rest = DIR_TOKENS
        .iter()
        .find_map(|token| fragment.strip_prefix(token))
        .unwrap_or(fragment);

    let mut path = shim_dir.to_path_buf();
    for segment in rest.split(['\\', '/']) {
        match segment {
            "" | "." => {}
            ".." => {
                path.pop();
            }
            name => path.push(name),
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_parent_segment() {
        let dir = Path::new("prefix").join("bin");
        assert_eq!(
            expand_fragment(&dir, r"%~dp0..\node_modules"),
            Path::new("prefix").join("node_modules")
        );
    }

    #[test]
    fn test_expand_collapses_separators() {
        let dir = Path::new("prefix");
        assert_eq!(
            expand_fragment(dir, r"%~dp0\\node_modules\.\foo"),
            Path::new("prefix").join("node_modules").join("foo")
        );
    }

    #[test]
    fn test_expand_dp0_variable() {
        let dir = Path::new("prefix");
        assert_eq!(
            expand_fragment(dir, r"%dp0%\node_modules"),
            dir.join("node_modules")
        );
    }

    #[test]
    fn test_expand_mixed_separators() {
        let dir = Path::new("a").join("b");
        assert_eq!(
            expand_fragment(&dir, "%~dp0../c/d"),
            Path::new("a").join("c").join("d")
        );
    }
}
