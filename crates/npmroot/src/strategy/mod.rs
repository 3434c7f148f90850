//! Individual ways of finding a package root.
//!
//! Each strategy returns an [`Attempt`](crate::Attempt) and never an error:
//! failures are absorbed as [`SoftFailure`](crate::SoftFailure) so the next
//! strategy still runs.

pub mod direct;
pub mod prefix;
pub mod search;
pub mod shim;
pub mod symlink;
