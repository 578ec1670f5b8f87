//! Core ticket data types.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ticket representing a support/maintenance request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    /// Unique identifier (UUID), immutable after creation.
    pub id: String,

    /// Human-readable title.
    pub name: String,

    /// Free-text detail, empty string when not provided.
    pub description: String,

    /// Completion flag: `false` = open, `true` = done.
    pub status: bool,

    /// Creation timestamp, milliseconds since the Unix epoch, immutable.
    pub created: i64,
}

impl Ticket {
    /// Create a new open ticket with a fresh UUID and the current timestamp.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            status: false,
            created: Utc::now().timestamp_millis(),
        }
    }
}
