//! Character display helpers used alongside a change review.

pub mod character;

pub use character::{character_line, character_short, stats_line};
