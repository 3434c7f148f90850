//! Locate the install directory of a globally installed npm package.
//!
//! Global packages land in places that depend on the OS and on npm's
//! configuration. Instead of assuming a layout, the resolver asks the system:
//! it follows the package's executable on the search path (through Windows
//! shims or POSIX symlinks) and falls back to `npm config get prefix`. A
//! directory is only returned once its `package.json` names the package.
//!
//! # Example
//!
//! ```no_run
//! use npmroot::{PackageQuery, Resolver};
//!
//! let query = PackageQuery::new("typescript").with_executable("tsc");
//! match Resolver::new().resolve(&query)? {
//!     Some(dir) => println!("{}", dir.display()),
//!     None => eprintln!("typescript is not installed globally"),
//! }
//! # Ok::<(), npmroot::Error>(())
//! ```

pub use attempt::{Attempt, Resolution, SoftFailure, Strategy};
pub use error::{Error, Result};
pub use npmroot_platform::{CommandRunner, PlatformId, SystemRunner};
pub use query::PackageQuery;
pub use resolver::{Resolver, resolve};
pub use verify::{PackageDescriptor, VerifiedPackage, read_descriptor, verify};

mod attempt;
mod error;
mod query;
mod resolver;
pub mod strategy;
mod verify;

#[cfg(test)]
mod testing;
