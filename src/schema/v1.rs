//! First revision, as shipped in the original `types.d.ts`.

use serde::{Deserialize, Serialize};

pub type NumberAlias = i32;
pub type BoolAlias = bool;
pub type StringAlias = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "content")]
pub enum Colour {
    Red(i32),
    Green(i32),
    Blue(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub enjoys_coffee: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_uses_content_field() {
        let json = serde_json::to_string(&Colour::Blue(3)).unwrap();
        assert_eq!(json, r#"{"t":"Blue","content":3}"#);
        assert!(serde_json::from_str::<Colour>(r#"{"t":"Blue","c":3}"#).is_err());
    }

    #[test]
    fn test_person_json() {
        let person: Person = serde_json::from_str(r#"{"name":"Ada","age":36,"enjoys_coffee":true}"#).unwrap();
        assert_eq!(
            person,
            Person {
                name: "Ada".to_string(),
                age: 36,
                enjoys_coffee: true,
            }
        );
    }
}
