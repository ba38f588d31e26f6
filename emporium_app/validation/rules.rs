use std::fmt::Display;

use emporium_types::errors::{FieldError, ValidationErrors};

/// Fails when `value` is empty or only whitespace.
pub fn not_blank(field: &str, label: &str, value: &str) -> Option<FieldError> {
    value
        .trim()
        .is_empty()
        .then(|| FieldError::new(field, format!("{label} can't be blank.")))
}

/// Fails when `value` has more than `max` characters.
pub fn max_length(field: &str, label: &str, value: &str, max: usize) -> Option<FieldError> {
    (value.chars().count() > max)
        .then(|| FieldError::new(field, format!("{label} can't be longer than {max} characters.")))
}

/// Fails when `value` is outside `min..=max`.
pub fn in_range<T>(field: &str, label: &str, value: T, min: T, max: T) -> Option<FieldError>
where
    T: PartialOrd + Display,
{
    (value < min || value > max)
        .then(|| FieldError::new(field, format!("{label} must be between {min} and {max}.")))
}

/// Fails when `value` is below zero.
pub fn not_negative(field: &str, label: &str, value: i64) -> Option<FieldError> {
    (value < 0).then(|| FieldError::new(field, format!("{label} can't be negative.")))
}

/// Fails unless `value` strictly precedes `other`. Reported on `field`.
pub fn before<T: PartialOrd>(field: &str, value: &T, other: &T, message: &str) -> Option<FieldError> {
    (value >= other).then(|| FieldError::new(field, message))
}

/// Fails unless `value` strictly follows `other`. Reported on `field`.
pub fn after<T: PartialOrd>(field: &str, value: &T, other: &T, message: &str) -> Option<FieldError> {
    (value <= other).then(|| FieldError::new(field, message))
}

/// Fails unless `value` is one of `allowed`.
pub fn one_of<T: PartialEq>(field: &str, value: &T, allowed: &[T], message: &str) -> Option<FieldError> {
    (!allowed.contains(value)).then(|| FieldError::new(field, message))
}

/// Gathers the outcome of a list of rules.
pub fn collect(rules: impl IntoIterator<Item = Option<FieldError>>) -> ValidationErrors {
    rules.into_iter().flatten().collect::<Vec<_>>().into()
}

/// Re-scopes nested failures under `prefix`, e.g. `items[2].quantity`.
pub fn nested(prefix: &str, errors: ValidationErrors) -> ValidationErrors {
    errors
        .into_iter()
        .map(|e| FieldError::new(format!("{prefix}.{}", e.field), e.message))
        .collect::<Vec<_>>()
        .into()
}
