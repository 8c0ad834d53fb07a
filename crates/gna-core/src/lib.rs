//! # gna-core
//!
//! Foundational pieces shared by the other crates in the workspace: the
//! error hierarchy with its `ensure!` / `fail!` macros, and the strict
//! parsers used at every string boundary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
