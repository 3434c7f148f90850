use crate::attempt::{Attempt, SoftFailure, Strategy};
use crate::verify::verify;
use npmroot_platform::{CommandRunner, PlatformId, package_dir};
use tracing::debug;

/// Ask npm for its global prefix and look for the package below it.
pub fn locate<R: CommandRunner>(runner: &R, platform: PlatformId, package: &str) -> Attempt {
    let prefix = match runner.run(platform.npm_executable(), &["config", "get", "prefix"]) {
        Ok(Some(prefix)) => prefix,
        Ok(None) => return Attempt::NoMatch,
        Err(err) => return Attempt::Failed(SoftFailure::new(Strategy::NpmPrefix, err)),
    };

    let candidate = package_dir(platform.install_tree(&prefix), package);
    debug!(%prefix, candidate = %candidate.display(), "checking npm global prefix");
    verify(&candidate, package).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedRunner, write_package};
    use tempfile::tempdir;

    #[test]
    fn test_locate_posix_layout() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("lib/node_modules/foo-cli");
        write_package(&root, "foo-cli");

        let runner = ScriptedRunner::new().output("npm", dir.path().to_str().unwrap());
        let attempt = locate(&runner, PlatformId::Linux, "foo-cli");
        assert_eq!(attempt.found().unwrap().path(), root);
        assert_eq!(runner.calls()[0].1, ["config", "get", "prefix"]);
    }

    #[test]
    fn test_locate_windows_layout() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("node_modules").join("foo-cli");
        write_package(&root, "foo-cli");

        let runner = ScriptedRunner::new().output("npm.cmd", dir.path().to_str().unwrap());
        let attempt = locate(&runner, PlatformId::Windows, "foo-cli");
        assert_eq!(attempt.found().unwrap().path(), root);
    }

    #[test]
    fn test_locate_scoped_package() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("lib/node_modules/@scope/tool");
        write_package(&root, "@scope/tool");

        let runner = ScriptedRunner::new().output("npm", dir.path().to_str().unwrap());
        assert!(locate(&runner, PlatformId::Macos, "@scope/tool").is_found());
    }

    #[test]
    fn test_locate_not_installed() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new().output("npm", dir.path().to_str().unwrap());
        assert_eq!(locate(&runner, PlatformId::Linux, "foo-cli"), Attempt::NoMatch);
    }

    #[test]
    fn test_locate_empty_prefix() {
        let runner = ScriptedRunner::new().silent("npm");
        assert_eq!(locate(&runner, PlatformId::Linux, "foo-cli"), Attempt::NoMatch);
    }

    #[test]
    fn test_locate_missing_npm_is_soft() {
        let runner = ScriptedRunner::new();
        match locate(&runner, PlatformId::Linux, "foo-cli") {
            Attempt::Failed(failure) => assert_eq!(failure.strategy, Strategy::NpmPrefix),
            other => panic!("expected soft failure, got {other:?}"),
        }
    }
}
