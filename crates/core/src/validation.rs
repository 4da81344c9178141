//! Field-level input validation support.
//!
//! Request DTOs derive [`validator::Validate`] and reference the patterns
//! below. [`field_messages`] flattens a [`ValidationErrors`] tree (including
//! nested structs and lists) into `path -> messages` for API responses.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Letters and spaces only (person names).
pub static PERSON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid regex"));

/// Letters, digits and spaces (street addresses).
pub static ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s]+$").expect("valid regex"));

/// Lowercase `.com` / `.com.br` mail domains.
pub static SELLER_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[a-z]+\.com(\.br)?$").expect("valid regex"));

/// Exactly eight digits.
pub static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("valid regex"));

/// Field path -> human-readable messages.
pub type FieldMessages = BTreeMap<String, Vec<String>>;

/// Flatten validation errors into dotted/indexed field paths.
///
/// Nested struct fields become `parent.child`, list entries become
/// `items[2].field`.
pub fn field_messages(errors: &ValidationErrors) -> FieldMessages {
    let mut out = FieldMessages::new();
    collect(errors, "", &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut FieldMessages) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = out.entry(path).or_default();
                for err in list {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed '{}' check", err.code));
                    messages.push(message);
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(entries) => {
                for (index, inner) in entries {
                    collect(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use validator::Validate;

    use super::*;

    #[derive(Serialize, Validate)]
    struct Line {
        #[validate(range(min = 1, message = "must be at least 1"))]
        quantity: i32,
    }

    #[derive(Validate)]
    struct Order {
        #[validate(regex(path = *ZIP_CODE, message = "must be 8 digits"))]
        zip: String,
        #[validate(length(min = 1), nested)]
        lines: Vec<Line>,
    }

    #[test]
    fn patterns_match_expected_inputs() {
        assert!(PERSON_NAME.is_match("Ana Maria"));
        assert!(!PERSON_NAME.is_match("R2D2"));
        assert!(ADDRESS.is_match("Rua das Flores 12"));
        assert!(!ADDRESS.is_match("Main St. #4"));
        assert!(SELLER_EMAIL.is_match("ana@example.com"));
        assert!(SELLER_EMAIL.is_match("ana.souza@loja.com.br"));
        assert!(!SELLER_EMAIL.is_match("ana@example.org"));
        assert!(!SELLER_EMAIL.is_match("ana@Example.com"));
        assert!(!SELLER_EMAIL.is_match("ana souza@example.com"));
        assert!(ZIP_CODE.is_match("01310100"));
        assert!(!ZIP_CODE.is_match("0131010"));
        assert!(!ZIP_CODE.is_match("0131010a"));
    }

    #[test]
    fn flattens_top_level_and_list_errors() {
        let order = Order {
            zip: "123".into(),
            lines: vec![Line { quantity: 5 }, Line { quantity: 0 }],
        };
        let errors = order.validate().unwrap_err();
        let messages = field_messages(&errors);

        assert_eq!(messages["zip"], vec!["must be 8 digits".to_string()]);
        assert_eq!(
            messages["lines[1].quantity"],
            vec!["must be at least 1".to_string()]
        );
        assert!(!messages.contains_key("lines[0].quantity"));
    }

    #[test]
    fn falls_back_to_code_without_message() {
        let order = Order {
            zip: "12345678".into(),
            lines: vec![],
        };
        let errors = order.validate().unwrap_err();
        let messages = field_messages(&errors);
        assert_eq!(messages["lines"], vec!["failed 'length' check".to_string()]);
    }
}
