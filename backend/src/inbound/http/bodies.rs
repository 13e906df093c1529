//! Response envelopes shared by several handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Stored;

use super::validation::render_timestamp;

/// Returned by every create endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedBody {
    /// Identifier assigned by the record store.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
}

impl<T> From<&Stored<T>> for CreatedBody {
    fn from(value: &Stored<T>) -> Self {
        Self {
            id: value.id.to_string(),
        }
    }
}

/// Acknowledges an update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OkBody {
    pub ok: bool,
}

/// Identity and timestamps common to every listed record.
pub(crate) struct RecordStamp {
    pub id: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl<T> From<&Stored<T>> for RecordStamp {
    fn from(value: &Stored<T>) -> Self {
        Self {
            id: value.id.to_string(),
            created_at: render_timestamp(value.created_at),
            updated_at: value.updated_at.map(render_timestamp),
        }
    }
}
