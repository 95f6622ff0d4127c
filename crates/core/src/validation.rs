//! Field-level validation helpers.
//!
//! Input DTOs derive [`validator::Validate`]; the rules here are referenced
//! from their `#[validate(...)]` attributes, and [`field_violations`] flattens
//! a failed run into the list returned to API clients.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Colour applied to a category created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex colour pattern is valid"));

/// One rejected input field.
///
/// `path` names the offending field (`["name"]`, `["tags", "1"]`); it is empty
/// when the body as a whole could not be read into the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub path: Vec<String>,
    pub code: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: vec![field.into()],
            code: code.into(),
            message: message.into(),
        }
    }

    /// A violation at an arbitrary (possibly nested) location in the body.
    pub fn at(path: Vec<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// `true` if `color` is `#` followed by exactly six hex digits.
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// `validator` rule: hex RGB colour such as `#3B82F6`.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if is_hex_color(color) {
        return Ok(());
    }
    let mut err = ValidationError::new("hex_color");
    err.message = Some(Cow::Borrowed("Color must be a hex value like #3B82F6"));
    Err(err)
}

/// Flatten `validator` output into field violations, sorted by field name.
pub fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                FieldViolation::new(field.to_string(), err.code.to_string(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.path.cmp(&b.path));
    violations
}
