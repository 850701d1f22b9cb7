pub mod game;
pub mod ticket;

pub use game::game_config;
pub use ticket::ticket_config;
