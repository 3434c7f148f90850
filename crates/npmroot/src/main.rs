use anyhow::Result;
use clap::{ArgAction, Parser};
use npmroot::{Attempt, PackageQuery, Resolution, Resolver, read_descriptor};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Parser)]
#[command(name = "npmroot", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Cli {
    /// Declared name of the globally installed package
    package: String,

    /// An executable the package installs on the search path
    executable: Option<String>,

    /// Resolve for this platform instead of the host (windows, linux, macos)
    #[arg(long)]
    platform: Option<String>,

    /// Print every strategy attempted to stderr
    #[arg(long)]
    trace: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn print_trace(resolution: &Resolution) {
    eprintln!("platform: {}", resolution.platform);
    for (strategy, attempt) in &resolution.attempts {
        match attempt {
            Attempt::Found(package) => eprintln!("  {strategy}: found {}", package.path().display()),
            Attempt::NoMatch => eprintln!("  {strategy}: no match"),
            Attempt::Failed(failure) => eprintln!("  {strategy}: failed ({})", failure.message),
        }
    }
    if let Some(version) = resolution
        .path
        .as_deref()
        .and_then(read_descriptor)
        .and_then(|descriptor| descriptor.version)
    {
        eprintln!("version: {version}");
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut query = PackageQuery::new(cli.package);
    if let Some(executable) = cli.executable {
        query = query.with_executable(executable);
    }

    let mut resolver = Resolver::new();
    if let Some(platform) = cli.platform {
        resolver = resolver.platform(platform);
    }

    let resolution = resolver.trace(&query)?;
    if cli.trace {
        print_trace(&resolution);
    }

    Ok(match resolution.path {
        Some(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        None => ExitCode::from(1),
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() { Cli::command().debug_assert(); }

    #[test]
    fn test_cli_parses_package_and_executable() {
        let cli = Cli::try_parse_from(["npmroot", "foo-cli", "foo", "--trace", "-vv"]).unwrap();
        assert_eq!(cli.package, "foo-cli");
        assert_eq!(cli.executable.as_deref(), Some("foo"));
        assert!(cli.trace);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_requires_package() {
        assert!(Cli::try_parse_from(["npmroot"]).is_err());
    }

    #[test]
    fn test_unsupported_platform_is_error() {
        let cli = Cli::try_parse_from(["npmroot", "foo-cli", "--platform", "plan9"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.to_string(), "OS 'plan9' is not supported");
    }
}
