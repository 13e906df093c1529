//! Shared amenities that residents can book.

use super::validation::{EntityValidationError, required_text};

/// Untrusted input for [`Asset::new`].
#[derive(Debug, Clone, Default)]
pub struct AssetDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub rules: Option<String>,
}

/// A bookable amenity such as a clubhouse or court.
///
/// Reservations refer to assets by name only; no referential check is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    name: String,
    description: Option<String>,
    rules: Option<String>,
}

impl Asset {
    pub fn new(draft: AssetDraft) -> Result<Self, EntityValidationError> {
        Ok(Self {
            name: required_text(draft.name, "name")?,
            description: draft.description,
            rules: draft.rules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn rules(&self) -> Option<&str> {
        self.rules.as_deref()
    }
}
