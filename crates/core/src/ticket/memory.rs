//! In-memory ticket store.
//!
//! The sole storage backend: a guarded `Vec` with process lifetime. The
//! lock is held for the full duration of each operation so every request
//! observes and mutates the collection atomically.

use std::sync::RwLock;

use crate::ticket::store::{CreateTicketRequest, TicketError, TicketPatch, TicketStore};
use crate::ticket::Ticket;

/// In-memory `TicketStore` backed by a `RwLock<Vec<Ticket>>`.
///
/// Lookup is a linear scan; the collection keeps insertion order. Nothing
/// is persisted across restarts.
pub struct InMemoryTicketStore {
    tickets: RwLock<Vec<Ticket>>,
}

impl InMemoryTicketStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_tickets(Vec::new())
    }

    /// Create a store pre-populated with the given tickets.
    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: RwLock::new(tickets),
        }
    }
}

impl Default for InMemoryTicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketStore for InMemoryTicketStore {
    fn create(&self, request: CreateTicketRequest) -> Result<Ticket, TicketError> {
        let ticket = Ticket::new(request.name, request.description);
        let mut tickets = self
            .tickets
            .write()
            .map_err(|e| TicketError::Store(e.to_string()))?;
        tickets.push(ticket.clone());
        Ok(ticket)
    }

    fn get(&self, id: &str) -> Result<Option<Ticket>, TicketError> {
        let tickets = self
            .tickets
            .read()
            .map_err(|e| TicketError::Store(e.to_string()))?;
        Ok(tickets.iter().find(|t| t.id == id).cloned())
    }

    fn all(&self) -> Result<Vec<Ticket>, TicketError> {
        let tickets = self
            .tickets
            .read()
            .map_err(|e| TicketError::Store(e.to_string()))?;
        Ok(tickets.clone())
    }

    fn update(&self, id: &str, patch: TicketPatch) -> Result<Ticket, TicketError> {
        let mut tickets = self
            .tickets
            .write()
            .map_err(|e| TicketError::Store(e.to_string()))?;

        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TicketError::NotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            ticket.name = name;
        }
        if let Some(description) = patch.description {
            ticket.description = description;
        }
        if let Some(status) = patch.status {
            ticket.status = status;
        }

        Ok(ticket.clone())
    }

    fn delete(&self, id: &str) -> Result<(), TicketError> {
        let mut tickets = self
            .tickets
            .write()
            .map_err(|e| TicketError::Store(e.to_string()))?;

        let before = tickets.len();
        tickets.retain(|t| t.id != id);
        if tickets.len() == before {
            return Err(TicketError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
