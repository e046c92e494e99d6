#![forbid(unsafe_code)]
//! typester: TypeScript declarations from Rust types
//!
//! typester reads Rust source, finds type aliases, structs and enums, and writes TypeScript declarations that match
//! the JSON `serde` produces for them. This crate provides the frontend (parsing, serde attributes, diagnostics), the
//! backend (TypeScript IR, lowering, emission), the CLI, and the versioned `schema` types the generator is tested on.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod frontend;
pub mod schema;
pub mod version;

pub use frontend::diagnostics;

pub use backend::{CodegenConfig, EnumRepr, GenerationError, TsCodegen};
