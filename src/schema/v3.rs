//! Third revision: `Blue` and `enjoys_coffee` carry an `(i32, String)` pair.

use serde::{Deserialize, Serialize};

pub type NumberAlias = i32;
pub type BoolAlias = bool;
pub type StringAlias = String;

/// A primary colour.
///
/// `Red` and `Green` carry an intensity; `Blue` also carries a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Colour {
    Red(i32),
    Green(i32),
    Blue((i32, String)),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Person {
    pub name: String,
    pub age: u32,
    /// Cups per day and favourite brew
    pub enjoys_coffee: (i32, String),
}
