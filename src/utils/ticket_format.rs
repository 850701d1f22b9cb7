use crate::models::{GameRule, Ticket};

/// `4-18-23-41-60 | Powerball: 9`
pub fn format_numbers(rule: &GameRule, ticket: &Ticket) -> String {
    let main: Vec<String> = ticket.main.iter().map(|n| n.to_string()).collect();
    format!("{} | {}: {}", main.join("-"), rule.bonus_label, ticket.bonus)
}

/// Copy line for a single ticket.
pub fn format_ticket(rule: &GameRule, ticket: &Ticket) -> String {
    format!(
        "{} Ticket #{}: {}",
        rule.name,
        ticket.index,
        format_numbers(rule, ticket)
    )
}

/// Copy text for a whole batch, one line per ticket.
pub fn format_batch(rule: &GameRule, tickets: &[Ticket]) -> String {
    tickets
        .iter()
        .map(|t| format!("{} #{}: {}", rule.name, t.index, format_numbers(rule, t)))
        .collect::<Vec<_>>()
        .join("\n")
}
