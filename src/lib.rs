//! # freecell-core
//!
//! A FreeCell solitaire rules engine. The crate owns the deck, seeded
//! deterministic dealing, move legality, the multi-card "supermove"
//! algorithm, the automatic safe-card promotion sweep, selection tracking,
//! and win detection. Rendering, hit-testing, and window plumbing belong to
//! the host; the engine only consumes logical slot identities and reports
//! back typed outcomes.
//!
//! ## Design Principles
//!
//! 1. **Deterministic deals**: game #N is fully reproduced from N alone via
//!    a bit-exact linear congruential generator — the same recurrence as
//!    the classic Microsoft dealer, so game #1 is the famous deal #1.
//!
//! 2. **Total operations**: every public operation is a total function over
//!    well-formed state. Illegal or out-of-range intents are no-ops, never
//!    errors; invariant violations are programming defects caught by debug
//!    assertions.
//!
//! 3. **Single owner**: one `Game` value owns all mutable state. The engine
//!    has no internal concurrency, performs no I/O, and never suspends; the
//!    host drives it once per frame.
//!
//! ## Frame Protocol
//!
//! Per frame, the host hit-tests input into a [`Spot`], then calls in order:
//! [`Game::select_or_target`], [`Game::tick`] (autoplay to a fixed point,
//! then the win check), and finally reads the board snapshot and
//! [`Game::cursor_hint`] for rendering.
//!
//! ```
//! use freecell_core::{Game, GameStatus, IntentOutcome, Spot};
//!
//! let mut game = Game::new();
//! game.deal(1);
//!
//! // Pick up the exposed card of column 0 and drop it on a free cell.
//! assert_eq!(game.select_or_target(Spot::Column(0)), IntentOutcome::Selected);
//! assert_eq!(game.select_or_target(Spot::Cell(0)), IntentOutcome::Moved);
//! assert_eq!(game.tick(), GameStatus::Running);
//! ```
//!
//! ## Modules
//!
//! - `core`: cards, the deal RNG, and the board containers
//! - `rules`: supermove capacity/walks and the autoplay sweep
//! - `game`: the `Game` state machine driven by player intents

pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, Card, DealRng, Rank, Suit, CELLS, COLUMNS, DECK_SIZE, GOALS};

pub use crate::game::{CursorHint, Game, GameStatus, IntentOutcome, Spot};

pub use crate::rules::{
    autoplay, move_capacity, move_run_onto_card, move_run_to_empty, run_onto_card, run_to_empty,
};
