//! typester backend
//!
//! Turns parsed Rust items into TypeScript declarations.
//!
//! The pipeline is:
//! 1. `syn::File` from the frontend → `lower` → `Vec<TsDecl>` (TypeScript IR)
//! 2. `Vec<TsDecl>` → `emit` → TypeScript source text
//!
//! ## Module Organization
//!
//! - `config.rs` - `CodegenConfig` and the default enum representation
//! - `ir/` - TypeScript IR (`TsType`, `TsField`, `TsDecl`)
//! - `lower/` - Rust items and types to IR, serde attributes applied
//! - `emit/` - IR to text, header and prelude
//! - `codegen.rs` - `TsCodegen` facade over the whole pipeline

pub mod codegen;
pub mod config;
pub mod emit;
pub mod ir;
pub mod lower;

pub use codegen::{GenerationError, TsCodegen};
pub use config::{CodegenConfig, EnumRepr};
pub use emit::TsEmitter;
pub use lower::{LoweringErrors, lower_file};
