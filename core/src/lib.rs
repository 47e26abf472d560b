//! Combinators for [`Option`]: filtering by a predicate, lazy and eager fallbacks for absent values, side effects
//! that leave the option unchanged, and presence queries.
//!
//! Import [`OptionExt`] to use them. The other modules bridge options to errors, futures, and `tracing`, each
//! behind its own feature.

pub mod option;
pub mod require;
pub mod util;

#[cfg(feature = "tracing")]
pub mod trace;

pub use option::OptionExt;
pub use require::{AbsentError, RequireExt};
