//! Property-based tests for typester
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use typester::backend::ir::{is_identifier, property_name};
use typester::backend::{CodegenConfig, TsCodegen};
use typester::frontend::attrs::RenameRule;
use typester::schema::v4::{Colour, ComplexType, Person};

// =============================================================================
// Strategies
// =============================================================================

/// snake_case Rust field names
fn field_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}(_[a-z][a-z0-9]{0,6}){0,3}".prop_filter("Not a keyword", |s| !is_keyword(s))
}

/// PascalCase Rust type and variant names
fn type_name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z][a-z0-9]{0,6}", 1..4)
        .prop_map(|parts| parts.concat())
        .prop_filter("Not a keyword", |s| s != "Self")
}

fn is_keyword(s: &str) -> bool {
    matches!(
        s,
        "as" | "break" | "const" | "continue" | "crate" | "else" | "enum" | "extern" | "false" | "fn" | "for" | "if"
            | "impl" | "in" | "let" | "loop" | "match" | "mod" | "move" | "mut" | "pub" | "ref" | "return" | "self"
            | "static" | "struct" | "super" | "trait" | "true" | "type" | "unsafe" | "use" | "where" | "while"
            | "async" | "await" | "dyn" | "abstract" | "become" | "box" | "do" | "final" | "macro" | "override"
            | "priv" | "typeof" | "unsized" | "virtual" | "yield" | "try" | "gen"
    )
}

/// Field types the generator accepts
fn field_type_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("i32".to_string()),
        Just("u64".to_string()),
        Just("f64".to_string()),
        Just("bool".to_string()),
        Just("String".to_string()),
        Just("char".to_string()),
        Just("()".to_string()),
    ];
    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(|t| format!("Vec<{t}>")),
            inner.clone().prop_map(|t| format!("Option<{t}>")),
            inner.clone().prop_map(|t| format!("Box<{t}>")),
            inner.clone().prop_map(|t| format!("HashMap<String, {t}>")),
            (inner.clone(), 1usize..4).prop_map(|(t, n)| format!("[{t}; {n}]")),
            prop::collection::vec(inner, 2..4).prop_map(|ts| format!("({})", ts.join(", "))),
        ]
    })
}

fn rename_rule_strategy() -> impl Strategy<Value = RenameRule> {
    prop_oneof![
        Just(RenameRule::LowerCase),
        Just(RenameRule::UpperCase),
        Just(RenameRule::PascalCase),
        Just(RenameRule::CamelCase),
        Just(RenameRule::SnakeCase),
        Just(RenameRule::ScreamingSnakeCase),
        Just(RenameRule::KebabCase),
        Just(RenameRule::ScreamingKebabCase),
    ]
}

fn colour_strategy() -> impl Strategy<Value = Colour> {
    prop_oneof![
        any::<i32>().prop_map(Colour::Red),
        any::<i32>().prop_map(Colour::Green),
        (any::<i32>(), ".*").prop_map(Colour::Blue),
    ]
}

fn person_strategy() -> impl Strategy<Value = Person> {
    (".*", any::<u32>(), any::<i32>(), ".*").prop_map(|(name, age, cups, brew)| Person {
        name,
        age,
        enjoys_coffee: (cups, brew),
    })
}

/// Quarter steps, exactly representable and printed without rounding
fn weight_strategy() -> impl Strategy<Value = f64> {
    (-4_000_000i32..4_000_000).prop_map(|n| f64::from(n) / 4.0)
}

fn complex_type_strategy() -> impl Strategy<Value = ComplexType> {
    (
        prop::collection::hash_map(".*", colour_strategy(), 0..4),
        prop::collection::vec(".*", 0..4),
        prop::option::of(person_strategy()),
        (weight_strategy(), weight_strategy(), weight_strategy()),
    )
        .prop_map(|(colour_map, list_of_names, optional_person, weight_tuple)| ComplexType {
            colour_map,
            list_of_names,
            optional_person,
            weight_tuple,
        })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: snake_case and lowercase leave snake_case field names untouched
    #[test]
    fn snake_case_fields_are_unchanged(field in field_name_strategy()) {
        prop_assert_eq!(RenameRule::SnakeCase.apply_to_field(&field), field.clone());
        prop_assert_eq!(RenameRule::LowerCase.apply_to_field(&field), field);
    }

    /// Property: renaming a variant to snake_case and back to PascalCase is the identity
    #[test]
    fn variant_snake_case_round_trips(variant in type_name_strategy()) {
        let snake = RenameRule::SnakeCase.apply_to_variant(&variant);
        prop_assert_eq!(RenameRule::PascalCase.apply_to_field(&snake), variant);
    }

    /// Property: rename rules never produce characters other than letters, digits, `_` and `-`
    #[test]
    fn renamed_names_stay_in_alphabet(field in field_name_strategy(), variant in type_name_strategy(), rule in rename_rule_strategy()) {
        for renamed in [rule.apply_to_field(&field), rule.apply_to_variant(&variant)] {
            prop_assert!(renamed.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'), "{}", renamed);
        }
    }

    /// Property: property keys are quoted exactly when they are not identifiers, and quoting is valid JSON
    #[test]
    fn property_names_quote_when_needed(name in ".*") {
        let rendered = property_name(&name);
        if is_identifier(&name) {
            prop_assert_eq!(rendered.as_ref(), name.as_str());
        } else {
            let parsed: String = serde_json::from_str(&rendered).unwrap();
            prop_assert_eq!(parsed, name);
        }
    }

    /// Property: v4 `ComplexType` values survive a JSON round trip
    #[test]
    fn complex_type_json_round_trip(value in complex_type_strategy()) {
        let json = serde_json::to_string(&value).unwrap();
        let back: ComplexType = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, value);
    }

    /// Property: every struct built from supported field types converts into one interface with every field
    #[test]
    fn generated_structs_convert(
        name in type_name_strategy(),
        fields in prop::collection::btree_map(field_name_strategy(), field_type_strategy(), 1..6),
    ) {
        let body: Vec<String> = fields.iter().map(|(f, t)| format!("    {f}: {t},")).collect();
        let source = format!("struct {name} {{\n{}\n}}\n", body.join("\n"));

        let ts = TsCodegen::with_config(CodegenConfig::bare()).try_generate(&source);
        prop_assert!(ts.is_ok(), "{}\n{:?}", source, ts);
        let ts = ts.unwrap();

        let head = format!("export interface {name} {{\n");
        prop_assert!(ts.starts_with(&head), "{}", ts);
        prop_assert!(ts.ends_with("}\n"), "{}", ts);
        prop_assert_eq!(ts.lines().count(), fields.len() + 2);
        for field in fields.keys() {
            let prefix = format!("  {field}: ");
            prop_assert!(ts.contains(&prefix), "missing {} in {}", field, ts);
        }
    }

    /// Property: the generator never panics, whatever the input
    #[test]
    fn generator_is_total(source in ".{0,200}") {
        let _ = TsCodegen::new().generate(&source);
    }
}
