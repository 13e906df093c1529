//! Identity and metadata shared by every stored record.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Store-assigned record identifier.
///
/// Rendered on the wire as a hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Mint a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl From<RecordId> for Uuid {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

/// A persisted entity plus the metadata the store attaches to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stored<T> {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    /// Set only by in-place updates such as a maintenance status change.
    pub updated_at: Option<DateTime<Utc>>,
    pub value: T,
}

impl<T> Stored<T> {
    /// Wrap a freshly created value.
    pub fn new(id: RecordId, created_at: DateTime<Utc>, value: T) -> Self {
        Self {
            id,
            created_at,
            updated_at: None,
            value,
        }
    }

    /// Transform the wrapped value, keeping identity and timestamps.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Stored<U> {
        Stored {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            value: f(self.value),
        }
    }
}

/// Named record collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Resident,
    MaintenanceRequest,
    Payment,
    Notice,
    Asset,
    Reservation,
    Complaint,
    Document,
}

impl Collection {
    /// Every collection in a stable order.
    pub const ALL: [Self; 8] = [
        Self::Resident,
        Self::MaintenanceRequest,
        Self::Payment,
        Self::Notice,
        Self::Asset,
        Self::Reservation,
        Self::Complaint,
        Self::Document,
    ];

    /// Storage name of the collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::MaintenanceRequest => "maintenancerequest",
            Self::Payment => "payment",
            Self::Notice => "notice",
            Self::Asset => "asset",
            Self::Reservation => "reservation",
            Self::Complaint => "complaint",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn record_id_round_trips_through_text() {
        let id = RecordId::random();
        let parsed: RecordId = id.to_string().parse().expect("valid id");
        assert_eq!(parsed, id);
    }

    #[rstest]
    #[case("")]
    #[case("12345")]
    #[case("not-a-uuid")]
    fn record_id_rejects_malformed_text(#[case] raw: &str) {
        assert!(raw.parse::<RecordId>().is_err());
    }

    #[rstest]
    fn collection_names_are_unique() {
        let mut names: Vec<_> = Collection::ALL.iter().map(Collection::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Collection::ALL.len());
    }

    #[rstest]
    fn stored_map_keeps_metadata() {
        let stored = Stored::new(RecordId::random(), Utc::now(), 2_u8);
        let mapped = stored.clone().map(|value| value * 2);
        assert_eq!(mapped.id, stored.id);
        assert_eq!(mapped.created_at, stored.created_at);
        assert_eq!(mapped.value, 4);
    }
}
