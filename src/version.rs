//! typester version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time, so the CLI and any
//! generated-file tooling agree on the same string.

/// The typester version string (for example, `0.1.0`).
pub const TYPESTER_VERSION: &str = env!("CARGO_PKG_VERSION");
