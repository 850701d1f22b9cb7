pub mod game_rule_service;
pub mod ticket_service;

pub use game_rule_service::*;
pub use ticket_service::*;
