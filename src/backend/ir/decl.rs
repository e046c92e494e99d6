//! IR declarations
//!
//! One [`TsDecl`] is produced per converted Rust item and becomes one exported TypeScript declaration.

use serde::Serialize;

use super::types::{TsField, TsType};

/// A top-level TypeScript declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TsDecl {
    pub name: String,
    /// Type parameter names, in declaration order
    pub generics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    pub kind: TsDeclKind,
}

/// The shape of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TsDeclKind {
    /// `export type Name = T;`
    Alias(TsType),
    /// `export interface Name { ... }`
    Interface(Vec<TsField>),
    /// `export type Name = | A | B;`
    Union(Vec<TsType>),
}

impl TsDecl {
    /// Declaration head with type parameters, e.g. `Wrapper<T>`.
    pub fn head(&self) -> String {
        if self.generics.is_empty() {
            self.name.clone()
        } else {
            format!("{}<{}>", self.name, self.generics.join(", "))
        }
    }
}
