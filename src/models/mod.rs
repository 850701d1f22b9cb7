pub mod common;
pub mod game_rule;
pub mod ticket;

pub use common::*;
pub use game_rule::*;
pub use ticket::*;
