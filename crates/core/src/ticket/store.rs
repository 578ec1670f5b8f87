//! Ticket storage trait and request/patch types.

use serde::Deserialize;
use thiserror::Error;

use crate::ticket::Ticket;

/// Error type for ticket operations.
#[derive(Debug, Error)]
pub enum TicketError {
    /// Ticket not found.
    #[error("Ticket not found: {0}")]
    NotFound(String),

    /// Internal store failure (e.g. poisoned lock).
    #[error("Store error: {0}")]
    Store(String),
}

/// Request to create a new ticket.
///
/// Both fields fall back to empty strings when absent from the request
/// body, mirroring the original service's lack of input validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTicketRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Allow-listed partial update for a ticket.
///
/// Only the mutable fields can be patched; `id` and `created` supplied by
/// a client are ignored rather than merged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<bool>,
}

/// Trait for ticket storage backends.
pub trait TicketStore: Send + Sync {
    /// Create a new ticket and append it to the collection.
    fn create(&self, request: CreateTicketRequest) -> Result<Ticket, TicketError>;

    /// Get a ticket by ID.
    fn get(&self, id: &str) -> Result<Option<Ticket>, TicketError>;

    /// All tickets in insertion order.
    fn all(&self) -> Result<Vec<Ticket>, TicketError>;

    /// Merge the patch into the matching ticket in place.
    fn update(&self, id: &str, patch: TicketPatch) -> Result<Ticket, TicketError>;

    /// Remove every ticket with the given ID (IDs are expected unique).
    fn delete(&self, id: &str) -> Result<(), TicketError>;
}
