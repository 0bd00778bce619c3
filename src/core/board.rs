//! Board containers: tableau columns, free cells, and foundations.
//!
//! The `Board` owns every card in play and the primitives that relocate
//! them. It supports:
//! - Ordered columns where the last element is the exposed card
//! - Single-card free cells and per-suit foundation slots as `Option<Card>`
//! - The seeded, bit-reproducible deal
//! - Occupancy and conservation queries for the rules layer
//!
//! Read queries are total (out-of-range indices yield `None`/`0`); the
//! mutating primitives treat misuse as a programming defect and guard it
//! with debug assertions, never with error values.

use smallvec::SmallVec;

use crate::core::card::{Card, Rank, Suit};
use crate::core::rng::DealRng;

use serde::{Deserialize, Serialize};

/// Number of tableau columns.
pub const COLUMNS: usize = 8;
/// Number of free cells.
pub const CELLS: usize = 4;
/// Number of foundation slots.
pub const GOALS: usize = 4;
/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A run of cards lifted out of a column, longest possible run being
/// King down to Ace.
pub type Run = SmallVec<[Card; 13]>;

/// All cards in play.
///
/// ## Usage
///
/// ```
/// use freecell_core::Board;
///
/// let board = Board::deal(1);
/// assert_eq!(board.column(0).len(), 7);
/// assert_eq!(board.column(7).len(), 6);
/// assert_eq!(board.card_count(), 52);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Tableau columns; within a column, index order is stacking order and
    /// the last element is the exposed card.
    columns: [Vec<Card>; COLUMNS],

    /// Free cells, each empty or holding exactly one card.
    cells: [Option<Card>; CELLS],

    /// Foundations; each slot stores the top card of its pile, so a slot
    /// showing rank `r` accounts for `r` cards of that suit.
    goals: [Option<Card>; GOALS],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: std::array::from_fn(|_| Vec::new()),
            cells: [None; CELLS],
            goals: [None; GOALS],
        }
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal game number `number`.
    ///
    /// The deck is built King down to Ace, suits Spades, Hearts, Diamonds,
    /// Clubs within each rank, then shuffled with the classic Microsoft
    /// dealer's complement-index recurrence: for `i` in `0..51`,
    /// `j = 51 - draw() % (52 - i)`, swap `i` and `j`. Cards land on the
    /// columns round-robin. Same number, same layout, every platform.
    #[must_use]
    pub fn deal(number: i32) -> Self {
        let mut deck: Vec<Card> = Vec::with_capacity(DECK_SIZE);
        for &rank in Rank::ALL.iter().rev() {
            for &suit in Suit::ALL.iter().rev() {
                deck.push(Card::new(rank, suit));
            }
        }

        let mut rng = DealRng::new(number);
        for i in 0..deck.len() - 1 {
            let j = deck.len() - 1 - rng.next_draw() as usize % (deck.len() - i);
            deck.swap(i, j);
        }

        let mut board = Self::default();
        for (k, card) in deck.into_iter().enumerate() {
            board.columns[k % COLUMNS].push(card);
        }
        board
    }

    // === Read queries ===

    /// Cards of one column in stacking order; empty for out-of-range.
    #[must_use]
    pub fn column(&self, col: usize) -> &[Card] {
        self.columns.get(col).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All columns.
    #[must_use]
    pub fn columns(&self) -> &[Vec<Card>; COLUMNS] {
        &self.columns
    }

    /// All free cells.
    #[must_use]
    pub fn cells(&self) -> &[Option<Card>; CELLS] {
        &self.cells
    }

    /// All foundation tops.
    #[must_use]
    pub fn goals(&self) -> &[Option<Card>; GOALS] {
        &self.goals
    }

    /// The exposed card of a column — the only one a player may pick up or
    /// place onto.
    #[must_use]
    pub fn exposed(&self, col: usize) -> Option<Card> {
        self.columns.get(col).and_then(|pile| pile.last().copied())
    }

    /// Content of a free cell.
    #[must_use]
    pub fn cell(&self, cell: usize) -> Option<Card> {
        self.cells.get(cell).copied().flatten()
    }

    /// Top card of a foundation slot.
    #[must_use]
    pub fn goal(&self, goal: usize) -> Option<Card> {
        self.goals.get(goal).copied().flatten()
    }

    /// Whether `card` may settle on foundation slot `goal` right now.
    #[must_use]
    pub fn goal_accepts(&self, goal: usize, card: Card) -> bool {
        match self.goals.get(goal) {
            Some(&top) => card.can_settle_on(top),
            None => false,
        }
    }

    /// Number of empty free cells.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_none()).count()
    }

    /// Number of empty columns.
    #[must_use]
    pub fn empty_columns(&self) -> usize {
        self.columns.iter().filter(|pile| pile.is_empty()).count()
    }

    /// Total cards in play, attributing rank-many cards to each occupied
    /// foundation slot. Always 52 for a dealt board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let on_columns: usize = self.columns.iter().map(Vec::len).sum();
        let in_cells = self.cells.iter().flatten().count();
        let settled: usize = self
            .goals
            .iter()
            .flatten()
            .map(|card| card.rank.value() as usize)
            .sum();
        on_columns + in_cells + settled
    }

    /// Whether every foundation slot has reached its King.
    #[must_use]
    pub fn goals_complete(&self) -> bool {
        self.goals
            .iter()
            .all(|slot| slot.is_some_and(|card| card.rank == Rank::King))
    }

    // === Mutating primitives ===

    /// Remove and return the exposed card of a column.
    pub fn pop_exposed(&mut self, col: usize) -> Option<Card> {
        self.columns[col].pop()
    }

    /// Stack a card onto a column.
    pub fn push_column(&mut self, col: usize, card: Card) {
        self.columns[col].push(card);
    }

    /// Remove and return the card in a free cell.
    pub fn take_cell(&mut self, cell: usize) -> Option<Card> {
        self.cells[cell].take()
    }

    /// Put a card into an empty free cell.
    pub fn put_cell(&mut self, cell: usize, card: Card) {
        debug_assert!(self.cells[cell].is_none(), "free cell {cell} is occupied");
        self.cells[cell] = Some(card);
    }

    /// Settle a card onto a foundation slot.
    pub fn place_goal(&mut self, goal: usize, card: Card) {
        debug_assert!(self.goal_accepts(goal, card), "goal {goal} rejects {card}");
        self.goals[goal] = Some(card);
    }

    /// Detach the suffix of a column starting at index `from`, in stacking
    /// order.
    pub fn take_run(&mut self, col: usize, from: usize) -> Run {
        self.columns[col].drain(from..).collect()
    }

    /// Stack a run onto a column, preserving its order.
    pub fn extend_column(&mut self, col: usize, run: impl IntoIterator<Item = Card>) {
        self.columns[col].extend(run);
    }
}
