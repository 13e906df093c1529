//! Email address value type.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::validation::EntityValidationError;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One `@`, no whitespace, a dotted domain.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address, stored exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate `value` as the email field named `field`.
    pub fn parse(
        value: impl Into<String>,
        field: &'static str,
    ) -> Result<Self, EntityValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EntityValidationError::BlankField { field });
        }
        if !email_regex().is_match(&value) {
            return Err(EntityValidationError::InvalidEmail { field, value });
        }
        Ok(Self(value))
    }

    /// Validate a required email field.
    pub(crate) fn required(
        value: Option<String>,
        field: &'static str,
    ) -> Result<Self, EntityValidationError> {
        let value = value.ok_or(EntityValidationError::MissingField { field })?;
        Self::parse(value, field)
    }

    /// Text before the `@`.
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}
