//! Second revision: `Blue` lost its payload and the content field became `c`.

use serde::{Deserialize, Serialize};

pub type NumberAlias = i32;
pub type BoolAlias = bool;
pub type StringAlias = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Colour {
    Red(i32),
    Green(i32),
    Blue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub enjoys_coffee: bool,
}
