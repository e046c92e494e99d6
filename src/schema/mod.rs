//! Fixture vocabulary
//!
//! The types the generator is exercised on, as real Rust with serde derives. The definitions of `Colour` and
//! `Person` changed between revisions, so each revision lives in its own module and each module is converted as a
//! separate file:
//!
//! - `v1` - `Blue(i32)`, content field `content`, `enjoys_coffee: bool`
//! - `v2` - unit `Blue`, content field `c`
//! - `v3` - `Blue((i32, String))`, `enjoys_coffee: (i32, String)`
//! - `v4` - `v3` plus `ComplexType`
//!
//! The container aliases below are shared by every revision.

pub mod v1;
pub mod v2;
pub mod v3;
pub mod v4;

use std::collections::{HashMap, HashSet};

/// Unordered collection of distinct values. Serialized as a JSON array.
pub type Set<T> = HashSet<T>;

/// Serialized as a JSON object.
pub type Map<K, V> = HashMap<K, V>;

pub type List<T> = Vec<T>;

/// Absent values serialize as `null`.
pub type Optional<T> = Option<T>;

pub type Fallible<T, E> = Result<T, E>;
