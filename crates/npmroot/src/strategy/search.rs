use crate::attempt::{SoftFailure, Strategy};
use npmroot_platform::{CommandRunner, PlatformId};
use std::path::PathBuf;

/// Executables named `executable` on the search path.
///
/// Windows keeps every hit `where` prints; elsewhere only the first `which` hit counts.
pub fn locate_executable<R: CommandRunner>(
    runner: &R,
    platform: PlatformId,
    executable: &str,
) -> Result<Vec<PathBuf>, SoftFailure> {
    let output = runner
        .run(platform.search_command(), &[executable])
        .map_err(|err| SoftFailure::new(Strategy::SearchPath, err))?;

    let hits = output
        .iter()
        .flat_map(|out| out.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from);

    Ok(if platform.is_windows() {
        hits.collect()
    } else {
        hits.take(1).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRunner;

    #[test]
    fn test_where_keeps_every_hit() {
        let runner = ScriptedRunner::new().output("where", "C:\\a\\foo.cmd\r\n\r\nC:\\b\\foo.cmd");
        let hits = locate_executable(&runner, PlatformId::Windows, "foo").unwrap();
        assert_eq!(
            hits,
            [PathBuf::from("C:\\a\\foo.cmd"), PathBuf::from("C:\\b\\foo.cmd")]
        );
        assert_eq!(runner.calls(), [("where".to_string(), vec!["foo".to_string()])]);
    }

    #[test]
    fn test_which_keeps_first_hit() {
        let runner = ScriptedRunner::new().output("which", "/usr/bin/foo\n/opt/bin/foo");
        let hits = locate_executable(&runner, PlatformId::Linux, "foo").unwrap();
        assert_eq!(hits, [PathBuf::from("/usr/bin/foo")]);
    }

    #[test]
    fn test_no_output_no_hits() {
        let runner = ScriptedRunner::new().silent("which");
        assert!(locate_executable(&runner, PlatformId::Macos, "foo").unwrap().is_empty());
    }

    #[test]
    fn test_spawn_error_is_soft() {
        let runner = ScriptedRunner::new();
        let failure = locate_executable(&runner, PlatformId::Linux, "foo").unwrap_err();
        assert_eq!(failure.strategy, Strategy::SearchPath);
    }
}
