//! Form field validation helpers
//!
//! Missing and blank values are reported as `"<field> is required"`, with
//! underscores in the field name rendered as spaces.

use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// Trimmed text, `None` when absent or blank
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trimmed text that must be present and non-blank
pub fn required_text(value: Option<String>, field: &str) -> AppResult<String> {
    optional_text(value).ok_or_else(|| AppError::required(field))
}

/// Borrowed variant of [`required_text`]
pub fn non_blank<'a>(value: &'a str, field: &str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::required(field));
    }
    Ok(trimmed)
}

/// A head count that must be present and not negative
pub fn required_count(value: Option<i32>, field: &str) -> AppResult<i32> {
    let count = value.ok_or_else(|| AppError::required(field))?;
    if count < 0 {
        return Err(AppError::Validation(format!(
            "{} must not be negative",
            field.replace('_', " ")
        )));
    }
    Ok(count)
}

/// Parse a closed-set value such as a status or category
pub fn parse_choice<T>(value: &str) -> AppResult<T>
where
    T: FromStr<Err = String>,
{
    value.trim().parse().map_err(AppError::Validation)
}
