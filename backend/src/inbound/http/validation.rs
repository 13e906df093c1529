//! Shared validation helpers for inbound HTTP adapters.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;

use crate::domain::{Choice, Error, ParseChoiceError};

/// Validation error codes raised by the HTTP layer itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidChoice,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidChoice => "invalid_choice",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

fn invalid_choice_error(field: FieldName, err: &ParseChoiceError) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!(
        "{field} must be one of: {}",
        err.allowed.join(", ")
    ))
    .with_details(json!({
        "field": field,
        "value": err.input,
        "allowed": err.allowed,
        "code": ErrorCode::InvalidChoice.as_str(),
    }))
}

/// Parse a required closed-set value such as a status query parameter.
pub(crate) fn parse_choice<T>(value: Option<String>, field: FieldName) -> Result<T, Error>
where
    T: Choice + FromStr<Err = ParseChoiceError>,
{
    let raw = value
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))?;
    T::from_str(raw.trim()).map_err(|err| invalid_choice_error(field, &err))
}

/// Normalise an optional query filter; blank values mean "no filter".
pub(crate) fn filter_value(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}

/// Render a timestamp the way every response body does.
pub(crate) fn render_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
