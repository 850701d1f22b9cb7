use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Parameters of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRequest {
    /// Tickets wanted in the batch
    pub count: u32,
    /// Draw main numbers without replacement
    pub dedup_main: bool,
    /// Present main numbers in ascending order
    pub sort_main: bool,
    /// Reject tickets equal to an earlier ticket of the same batch
    pub dedup_batch: bool,
}

impl TicketRequest {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            dedup_main: true,
            sort_main: true,
            dedup_batch: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// 1-based position in the batch
    pub index: u32,
    /// Main numbers in presentation order
    pub main: Vec<u32>,
    pub bonus: u32,
    pub game_id: String,
}

impl Ticket {
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::new(&self.game_id, &self.main, self.bonus)
    }
}

/// Canonical identity of a ticket's numbers.
///
/// Main numbers are sorted on a private copy, so two tickets with the same
/// numbers drawn or displayed in a different order share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    game_id: String,
    main: Vec<u32>,
    bonus: u32,
}

impl DedupKey {
    pub fn new(game_id: &str, main: &[u32], bonus: u32) -> Self {
        let mut sorted = main.to_vec();
        sorted.sort_unstable();
        Self {
            game_id: game_id.to_string(),
            main: sorted,
            bonus,
        }
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let main: Vec<String> = self.main.iter().map(|n| n.to_string()).collect();
        write!(f, "{}|{}|B:{}", self.game_id, main.join(","), self.bonus)
    }
}

/// Outcome of one generation call.
///
/// `tickets.len() <= requested`; the two are equal unless `exhausted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub tickets: Vec<Ticket>,
    pub attempts: u32,
    pub attempts_cap: u32,
    /// The attempts cap ran out before the batch was full
    pub exhausted: bool,
}

/// Body of `POST /tickets/generate`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GenerateTicketsRequest {
    #[schema(example = "powerball")]
    pub game_id: String,
    /// Defaults to the configured default count
    #[schema(example = 5)]
    pub count: Option<u32>,
    /// Distinct main numbers within a ticket (default true)
    pub dedup_main: Option<bool>,
    /// Ascending main numbers (default true)
    pub sort_main: Option<bool>,
    /// Seed for a reproducible batch
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TicketResponse {
    pub index: u32,
    pub main: Vec<u32>,
    pub bonus: u32,
    /// Single-ticket copy line
    #[schema(example = "Powerball Ticket #1: 4-18-23-41-60 | Powerball: 9")]
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateTicketsResponse {
    pub batch_id: Uuid,
    pub game_id: String,
    pub game_name: String,
    pub bonus_label: String,
    pub tickets: Vec<TicketResponse>,
    pub requested: u32,
    pub attempts: u32,
    pub attempts_cap: u32,
    /// Fewer tickets than requested could be generated
    pub exhausted: bool,
    /// Whole batch, one line per ticket
    pub export_text: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_key_ignores_order() {
        let a = DedupKey::new("powerball", &[5, 1, 3], 7);
        let b = DedupKey::new("powerball", &[1, 3, 5], 7);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "powerball|1,3,5|B:7");
    }

    #[test]
    fn test_dedup_key_distinguishes_bonus_and_game() {
        let base = DedupKey::new("powerball", &[1, 2, 3], 7);
        assert_ne!(base, DedupKey::new("powerball", &[1, 2, 3], 8));
        assert_ne!(base, DedupKey::new("megamillions", &[1, 2, 3], 7));
    }

    #[test]
    fn test_ticket_key_leaves_presentation_alone() {
        let ticket = Ticket {
            index: 1,
            main: vec![42, 7, 19],
            bonus: 3,
            game_id: "megamillions".into(),
        };
        assert_eq!(ticket.dedup_key().to_string(), "megamillions|7,19,42|B:3");
        assert_eq!(ticket.main, vec![42, 7, 19]);
    }

    #[test]
    fn test_request_defaults() {
        let req = TicketRequest::new(3);
        assert_eq!(req.count, 3);
        assert!(req.dedup_main && req.sort_main && req.dedup_batch);
    }
}
