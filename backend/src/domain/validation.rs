//! Field-level validation shared by the entity constructors.
//!
//! Every entity is assembled from a draft of optional, untrusted values. The
//! helpers here turn those values into checked fields and report the first
//! failure as an [`EntityValidationError`] naming the offending field.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};

use super::choices::{Choice, ParseChoiceError};

/// Validation failure raised while building an entity from a draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityValidationError {
    /// A required field was absent.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
    /// A required text field was empty once trimmed.
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },
    /// The value is not a syntactically valid email address.
    #[error("{field} must be a valid email address")]
    InvalidEmail { field: &'static str, value: String },
    /// The value is outside the field's closed set of choices.
    #[error("{field} must be one of: {}", .allowed.join(", "))]
    InvalidChoice {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    /// The value could not be read as an ISO 8601 timestamp.
    #[error("{field} must be an ISO 8601 timestamp")]
    InvalidTimestamp { field: &'static str, value: String },
}

impl EntityValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::BlankField { field }
            | Self::InvalidEmail { field, .. }
            | Self::InvalidChoice { field, .. }
            | Self::InvalidTimestamp { field, .. } => *field,
        }
    }

    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::BlankField { .. } => "blank_field",
            Self::InvalidEmail { .. } => "invalid_email",
            Self::InvalidChoice { .. } => "invalid_choice",
            Self::InvalidTimestamp { .. } => "invalid_timestamp",
        }
    }

    /// Offending value, when one was supplied.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::MissingField { .. } | Self::BlankField { .. } => None,
            Self::InvalidEmail { value, .. }
            | Self::InvalidChoice { value, .. }
            | Self::InvalidTimestamp { value, .. } => Some(value.as_str()),
        }
    }

    /// Allowed values for choice fields.
    pub fn allowed(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::InvalidChoice { allowed, .. } => Some(*allowed),
            _ => None,
        }
    }

    pub(crate) fn from_choice(field: &'static str, err: ParseChoiceError) -> Self {
        Self::InvalidChoice {
            field,
            value: err.input,
            allowed: err.allowed,
        }
    }
}

/// Require a present, non-blank text value. The value is kept verbatim.
pub(crate) fn required_text(
    value: Option<String>,
    field: &'static str,
) -> Result<String, EntityValidationError> {
    let value = value.ok_or(EntityValidationError::MissingField { field })?;
    if value.trim().is_empty() {
        return Err(EntityValidationError::BlankField { field });
    }
    Ok(value)
}

/// Require a present value that may be empty.
pub(crate) fn required_present(
    value: Option<String>,
    field: &'static str,
) -> Result<String, EntityValidationError> {
    value.ok_or(EntityValidationError::MissingField { field })
}

/// Parse an optional choice, falling back to the type's default when absent.
pub(crate) fn choice_or_default<T>(
    value: Option<String>,
    field: &'static str,
) -> Result<T, EntityValidationError>
where
    T: Choice + Default + FromStr<Err = ParseChoiceError>,
{
    match value {
        None => Ok(T::default()),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|err| EntityValidationError::from_choice(field, err)),
    }
}

/// Parse a required timestamp.
///
/// Accepts RFC 3339 (`2025-11-02T10:00:00Z`, `...+05:30`) and offset-less
/// ISO 8601 date-times, which are read as UTC.
pub(crate) fn required_timestamp(
    value: Option<String>,
    field: &'static str,
) -> Result<DateTime<Utc>, EntityValidationError> {
    let raw = value.ok_or(EntityValidationError::MissingField { field })?;
    parse_timestamp(&raw).ok_or(EntityValidationError::InvalidTimestamp { field, value: raw })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(None, EntityValidationError::MissingField { field: "title" })]
    #[case(Some("   ".to_owned()), EntityValidationError::BlankField { field: "title" })]
    fn required_text_rejects_missing_and_blank(
        #[case] input: Option<String>,
        #[case] expected: EntityValidationError,
    ) {
        assert_eq!(required_text(input, "title"), Err(expected));
    }

    #[rstest]
    fn required_text_keeps_value_verbatim() {
        let value = required_text(Some(" Leaking tap ".to_owned()), "title").expect("valid");
        assert_eq!(value, " Leaking tap ");
    }

    #[rstest]
    fn required_present_allows_empty() {
        assert_eq!(
            required_present(Some(String::new()), "apartment"),
            Ok(String::new())
        );
    }

    #[rstest]
    #[case("2025-11-02T10:00:00Z")]
    #[case("2025-11-02T15:30:00+05:30")]
    #[case("2025-11-02T10:00:00")]
    #[case("2025-11-02 10:00:00")]
    #[case("2025-11-02T10:00")]
    fn timestamps_normalise_to_utc(#[case] raw: &str) {
        let parsed = required_timestamp(Some(raw.to_owned()), "start_time").expect("parses");
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2025, 11, 2, 10, 0, 0)
                .single()
                .expect("valid date")
        );
    }

    #[rstest]
    fn invalid_timestamp_reports_field_and_value() {
        let err = required_timestamp(Some("tomorrow".to_owned()), "end_time")
            .expect_err("not a timestamp");
        assert_eq!(err.field(), "end_time");
        assert_eq!(err.code(), "invalid_timestamp");
        assert_eq!(err.value(), Some("tomorrow"));
    }

    #[rstest]
    fn choice_error_message_lists_allowed_values() {
        let err = EntityValidationError::InvalidChoice {
            field: "status",
            value: "done".to_owned(),
            allowed: &["open", "closed"],
        };
        assert_eq!(err.to_string(), "status must be one of: open, closed");
        assert_eq!(err.allowed(), Some(&["open", "closed"][..]));
    }
}
