//! Parsing of npm-generated Windows command shims.
//!
//! # Architecture
//!
//! A shim is a small `.cmd` stub npm writes next to the global prefix. It
//! forwards to a script inside the package-install tree, addressed relative
//! to the shim's own directory. This crate only reads that text: it turns a
//! shim into a candidate package root and leaves it to the caller to decide
//! whether the candidate is really the package.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use npmroot_shim::{ShimGrammar, ShimRule};
//!
//! let grammar = ShimGrammar::for_package("foo-cli").unwrap();
//! let content = r"node %~dp0..\node_modules\foo-cli\bin\foo.js'";
//!
//! let found = grammar.extract(content).unwrap();
//! assert_eq!(found.rule, ShimRule::InstallTree);
//!
//! let shim = Path::new("prefix").join("bin").join("foo.cmd");
//! assert_eq!(
//!     grammar.candidate(&shim, content),
//!     Some(Path::new("prefix").join("node_modules").join("foo-cli"))
//! );
//! ```

pub use error::{Error, Result};
pub use grammar::{ShimGrammar, ShimMatch, ShimRule};
pub use path::expand_fragment;

mod error;
mod grammar;
mod path;
