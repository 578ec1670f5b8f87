use std::sync::Arc;
use ticketd_core::TicketStore;

/// Shared application state
pub struct AppState {
    ticket_store: Arc<dyn TicketStore>,
}

impl AppState {
    pub fn new(ticket_store: Arc<dyn TicketStore>) -> Self {
        Self { ticket_store }
    }

    pub fn ticket_store(&self) -> &dyn TicketStore {
        self.ticket_store.as_ref()
    }
}
