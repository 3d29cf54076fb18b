//! Spelling Bee solver.
//!
//! A [`Dictionary`] groups a word list by letter set ([`Key`]) once, then
//! answers any number of puzzles concurrently. [`Ranking`] orders the
//! answers for display.

pub mod dictionary;
pub mod key;
pub mod loader;
pub mod puzzle;
pub mod rank;
pub mod stats;

pub use dictionary::Dictionary;
pub use key::Key;
pub use loader::{clean, read_words, LoadError};
pub use puzzle::Puzzle;
pub use rank::{cmp_fn, Ranking};
pub use stats::{NoStats, Stats};
