//! Fourth revision: `v3` plus an aggregate exercising every container.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type NumberAlias = i32;
pub type BoolAlias = bool;
pub type StringAlias = String;

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
    pub enjoys_coffee: (i32, String),
}

/// Maps, lists, optionals and tuples in one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComplexType {
    pub colour_map: HashMap<String, Colour>,
    pub list_of_names: Vec<String>,
    pub optional_person: Option<Person>,
    /// Always exactly three weights
    pub weight_tuple: (f64, f64, f64),
}
