mod memory;
mod seed;
mod store;
mod types;

pub use memory::InMemoryTicketStore;
pub use seed::seed_tickets;
pub use store::{CreateTicketRequest, TicketError, TicketPatch, TicketStore};
pub use types::Ticket;
