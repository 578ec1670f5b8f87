pub mod config;
pub mod ticket;

pub use config::{load_config, load_config_from_str, Config, ConfigError, ServerConfig};
pub use ticket::{
    seed_tickets, CreateTicketRequest, InMemoryTicketStore, Ticket, TicketError, TicketPatch,
    TicketStore,
};
