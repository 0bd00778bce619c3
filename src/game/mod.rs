//! The playable game: dealing, selection, intents, and the frame tick.
//!
//! A [`Game`] owns one [`Board`] plus the selection handle and flags. The
//! host drives it with logical slot identities ([`Spot`]) — the engine
//! never sees pixels. See the crate docs for the per-frame call order.

mod intent;

pub use intent::{CursorHint, IntentOutcome};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Card, DECK_SIZE};
use crate::rules::autoplay;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No deal yet; all intents are ignored.
    NotStarted,
    /// A deal is in play.
    Running,
    /// All four foundations reached their King.
    Won,
}

/// Logical identity of a slot the player can tap: a tableau column, a free
/// cell, or a foundation slot. The host's hit-testing produces these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spot {
    Column(usize),
    Cell(usize),
    Goal(usize),
}

/// The rules engine of a FreeCell game.
///
/// ## Usage
///
/// ```
/// use freecell_core::{Game, GameStatus, Spot};
///
/// let mut game = Game::new();
/// game.deal(1);
/// assert_eq!(game.status(), GameStatus::Running);
/// assert_eq!(game.game_number(), Some(1));
///
/// game.select_or_target(Spot::Column(3));
/// assert!(game.selected_card().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
    /// Held card, as a re-resolvable handle: the exposed card of a column
    /// or the content of a cell. Never `Spot::Goal`.
    selection: Option<Spot>,
    /// Armed the first time the player clears a selection; autoplay only
    /// sweeps while armed, so a fresh deal never yanks cards on its own.
    autoplay_armed: bool,
    game_number: Option<i32>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create an engine with no deal in play.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::NotStarted,
            selection: None,
            autoplay_armed: false,
            game_number: None,
        }
    }

    /// Deal game number `number`, discarding any prior arrangement.
    pub fn deal(&mut self, number: i32) {
        self.board = Board::deal(number);
        self.status = GameStatus::Running;
        self.selection = None;
        self.autoplay_armed = false;
        self.game_number = Some(number);
    }

    /// Deal a random game number in the classic `1..=30000` range and
    /// return it.
    pub fn deal_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i32 {
        let number = rng.gen_range(1..=30_000);
        self.deal(number);
        number
    }

    /// Run one frame's automatic work: the autoplay sweep (while armed)
    /// followed by the win check. Returns the resulting status.
    pub fn tick(&mut self) -> GameStatus {
        if self.status == GameStatus::Running {
            if self.autoplay_armed {
                autoplay(&mut self.board);
            }
            debug_assert_eq!(self.board.card_count(), DECK_SIZE);
            if self.board.goals_complete() {
                self.selection = None;
                self.status = GameStatus::Won;
            }
        }
        self.status
    }

    // === Snapshot for the presentation layer ===

    /// Read-only view of all card locations.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The held slot, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Spot> {
        self.selection
    }

    /// The held card, resolved through the board.
    #[must_use]
    pub fn selected_card(&self) -> Option<Card> {
        match self.selection? {
            Spot::Column(col) => self.board.exposed(col),
            Spot::Cell(cell) => self.board.cell(cell),
            Spot::Goal(_) => None,
        }
    }

    /// The dealt game number; `None` before the first deal.
    #[must_use]
    pub fn game_number(&self) -> Option<i32> {
        self.game_number
    }

    /// Whether all four foundations reached their King.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.goals_complete()
    }

    // === Internals shared with the intent handlers ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_selection(&mut self, spot: Spot) {
        self.selection = Some(spot);
    }

    /// Clear the held card and arm autoplay — the player has finished an
    /// action, so obviously-safe cards may now sweep to the foundations.
    pub(crate) fn clear_selection(&mut self) {
        self.selection = None;
        self.autoplay_armed = true;
    }

    /// Remove the held card from its container and return it.
    pub(crate) fn lift_selected(&mut self) -> Option<Card> {
        match self.selection? {
            Spot::Column(col) => self.board.pop_exposed(col),
            Spot::Cell(cell) => self.board.take_cell(cell),
            Spot::Goal(_) => None,
        }
    }
}
