//! Hardcoded tickets present at process start.

use crate::ticket::Ticket;

/// The three tickets the collection is seeded with before any client
/// interaction.
pub fn seed_tickets() -> Vec<Ticket> {
    vec![
        Ticket::new(
            "Поменять краску в принтере, ком. 404",
            "Принтер HP LJ-1210, картриджи на складе",
        ),
        Ticket::new("Переустановить Windows, PC-Hall24", ""),
        Ticket::new(
            "Установить обновление KB-31642dv3875",
            "Вышло критическое обновление для Windows",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_three_open_tickets() {
        let tickets = seed_tickets();
        assert_eq!(tickets.len(), 3);
        for ticket in &tickets {
            assert!(!ticket.id.is_empty());
            assert!(!ticket.status);
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let tickets = seed_tickets();
        assert_ne!(tickets[0].id, tickets[1].id);
        assert_ne!(tickets[1].id, tickets[2].id);
        assert_ne!(tickets[0].id, tickets[2].id);
    }
}
