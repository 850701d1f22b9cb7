pub mod random;
pub mod ticket_format;

pub use random::{RandomSource, UniformSource, sample_distinct, sample_independent};
pub use ticket_format::{format_batch, format_numbers, format_ticket};
