//! Core engine types: cards, the deal RNG, and the board containers.
//!
//! This module contains the fundamental building blocks the rules and game
//! layers are written against. Everything here is pure data plus total
//! predicates and container primitives.

pub mod board;
pub mod card;
pub mod rng;

pub use board::{Board, Run, CELLS, COLUMNS, DECK_SIZE, GOALS};
pub use card::{Card, Rank, Suit};
pub use rng::DealRng;
