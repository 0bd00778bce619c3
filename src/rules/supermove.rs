//! The multi-card "supermove".
//!
//! Single-card FreeCell rules never move a stacked run directly; the
//! supermove convention simulates shuttling the run one card at a time
//! through free cells and empty columns, which bounds the movable length at
//! `(empty_cells + 1) * 2^(empty_columns)`. The bound depends on current
//! occupancy and is computed fresh for every query.
//!
//! A movable run is always a *suffix* of a column: walking from the exposed
//! card toward the column head, each adjacent pair must be descending and
//! alternating in color. Two destination variants exist:
//!
//! - onto an exposed card: the walk stops at the first probed card that
//!   stacks on the destination card; the suffix from there down is the run
//! - into an empty column: the walk takes the maximal legal suffix, the
//!   destination column is excluded from the capacity count (it cannot
//!   serve as its own scratch space), and a run shorter than two cards is
//!   not a supermove at all — the caller performs an ordinary single move
//!
//! Each variant is split into a pure probe returning the run length and an
//! applier that relocates the run.

use crate::core::{Board, COLUMNS};

/// Maximum cards movable as one run given current occupancy.
///
/// `into_empty_column` excludes the destination column from the empty-column
/// count.
///
/// ```
/// use freecell_core::{move_capacity, Board};
///
/// // Fresh deal: no empty cells were used yet, no column is empty.
/// let board = Board::deal(1);
/// assert_eq!(move_capacity(&board, false), 5);
/// ```
#[must_use]
pub fn move_capacity(board: &Board, into_empty_column: bool) -> usize {
    let cells = board.empty_cells();
    let mut columns = board.empty_columns();
    if into_empty_column {
        columns = columns.saturating_sub(1);
    }
    (cells + 1) << columns
}

/// Probe a supermove from the suffix of `src` onto the exposed card of
/// `dst`. Returns the length of the movable run.
///
/// At most `move_capacity` cards are probed; if no probed card stacks on
/// the destination before the walk breaks or the bound runs out, the move
/// is illegal. A result of 1 is an ordinary single-card move expressed
/// through the same walk.
#[must_use]
pub fn run_onto_card(board: &Board, src: usize, dst: usize) -> Option<usize> {
    if src == dst || src >= COLUMNS || dst >= COLUMNS {
        return None;
    }
    let landing = board.exposed(dst)?;
    let column = board.column(src);
    let allowed = move_capacity(board, false);

    for probe in 0..allowed.min(column.len()) {
        let idx = column.len() - 1 - probe;
        let card = column[idx];
        if card.can_stack_on(landing) {
            return Some(probe + 1);
        }
        // keep walking only while the pair above continues the run
        if idx == 0 || !card.can_stack_on(column[idx - 1]) {
            break;
        }
    }
    None
}

/// Apply the supermove probed by [`run_onto_card`], preserving run order:
/// the deepest walked card lands on the destination card and the previously
/// exposed card stays exposed. Returns the length moved.
pub fn move_run_onto_card(board: &mut Board, src: usize, dst: usize) -> Option<usize> {
    let len = run_onto_card(board, src, dst)?;
    let from = board.column(src).len() - len;
    let run = board.take_run(src, from);
    board.extend_column(dst, run);
    Some(len)
}

/// Probe a supermove from the suffix of `src` into the empty column `dst`.
/// Returns the length of the maximal movable run, which must be at least 2.
#[must_use]
pub fn run_to_empty(board: &Board, src: usize, dst: usize) -> Option<usize> {
    if src == dst || src >= COLUMNS || dst >= COLUMNS {
        return None;
    }
    if !board.column(dst).is_empty() {
        return None;
    }
    let column = board.column(src);
    let allowed = move_capacity(board, true);

    let mut len = 0;
    for probe in 0..allowed.min(column.len()) {
        let idx = column.len() - 1 - probe;
        len = probe + 1;
        if idx == 0 || !column[idx].can_stack_on(column[idx - 1]) {
            break;
        }
    }
    if len < 2 {
        return None;
    }
    Some(len)
}

/// Apply the supermove probed by [`run_to_empty`]. Returns the length moved.
pub fn move_run_to_empty(board: &mut Board, src: usize, dst: usize) -> Option<usize> {
    let len = run_to_empty(board, src, dst)?;
    let from = board.column(src).len() - len;
    let run = board.take_run(src, from);
    board.extend_column(dst, run);
    Some(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    /// Board with a staged alternating run on column 1 ending at the
    /// exposed card, a landing card on column 0, fillers keeping columns
    /// 3..=7 non-empty, and column 2 empty.
    fn staged() -> Board {
        let mut board = Board::new();
        board.push_column(0, card(Rank::King, Suit::Spades));
        board.push_column(0, card(Rank::Six, Suit::Spades));

        board.push_column(1, card(Rank::King, Suit::Hearts));
        board.push_column(1, card(Rank::Five, Suit::Hearts));
        board.push_column(1, card(Rank::Four, Suit::Spades));
        board.push_column(1, card(Rank::Three, Suit::Diamonds));

        let fillers = [
            card(Rank::King, Suit::Clubs),
            card(Rank::King, Suit::Diamonds),
            card(Rank::Queen, Suit::Hearts),
            card(Rank::Queen, Suit::Clubs),
            card(Rank::Queen, Suit::Diamonds),
        ];
        for (i, filler) in fillers.into_iter().enumerate() {
            board.push_column(3 + i, filler);
        }
        board
    }

    #[test]
    fn test_capacity_formula() {
        let mut board = staged();
        // 4 empty cells, 1 empty column
        assert_eq!(move_capacity(&board, false), 10);
        assert_eq!(move_capacity(&board, true), 5);

        board.put_cell(0, card(Rank::Ten, Suit::Hearts));
        board.put_cell(1, card(Rank::Ten, Suit::Spades));
        assert_eq!(move_capacity(&board, false), 6);

        board.push_column(2, card(Rank::Ten, Suit::Clubs));
        // no empty columns left
        assert_eq!(move_capacity(&board, false), 3);
        assert_eq!(move_capacity(&board, true), 3);
    }

    #[test]
    fn test_run_onto_card() {
        let mut board = staged();
        assert_eq!(run_onto_card(&board, 1, 0), Some(3));

        assert_eq!(move_run_onto_card(&mut board, 1, 0), Some(3));
        let rendered: Vec<String> = board.column(0).iter().map(Card::to_string).collect();
        assert_eq!(rendered, ["KS", "6S", "5H", "4S", "3D"]);
        assert_eq!(board.column(1).len(), 1);
    }

    #[test]
    fn test_run_onto_card_needs_a_landing() {
        let mut board = staged();
        // column 3 exposes KC; nothing in the run stacks on a King
        assert_eq!(run_onto_card(&board, 1, 3), None);
        // a broken pair stops the walk before the landing is reached
        board.push_column(1, card(Rank::Ace, Suit::Clubs));
        assert_eq!(run_onto_card(&board, 1, 0), None);
    }

    #[test]
    fn test_single_card_is_a_run_of_one() {
        let board = staged();
        // QH (column 5) stacks directly on KC (column 3)
        assert_eq!(run_onto_card(&board, 5, 3), Some(1));
    }

    #[test]
    fn test_run_to_empty_takes_maximal_run() {
        let mut board = staged();
        // capacity into the empty column: (4+1) * 2^0 = 5, run is 3 long
        assert_eq!(run_to_empty(&board, 1, 2), Some(3));
        assert_eq!(move_run_to_empty(&mut board, 1, 2), Some(3));
        let rendered: Vec<String> = board.column(2).iter().map(Card::to_string).collect();
        assert_eq!(rendered, ["5H", "4S", "3D"]);
    }

    #[test]
    fn test_run_to_empty_rejects_single_cards() {
        let board = staged();
        // column 0 suffix: 6S alone (KS does not continue the run)
        assert_eq!(run_to_empty(&board, 0, 2), None);
    }

    #[test]
    fn test_run_to_empty_requires_empty_destination() {
        let board = staged();
        assert_eq!(run_to_empty(&board, 1, 0), None);
    }

    #[test]
    fn test_bound_is_exact() {
        // F = 1 empty cell, C = 1 empty column: capacity onto a card is
        // (1+1) * 2^1 = 4. A 4-card run lands; a 5-card run must not.
        let mut board = Board::new();
        board.push_column(0, card(Rank::Ten, Suit::Spades));
        board.push_column(1, card(Rank::King, Suit::Clubs));
        board.push_column(1, card(Rank::Nine, Suit::Hearts));
        board.push_column(1, card(Rank::Eight, Suit::Spades));
        board.push_column(1, card(Rank::Seven, Suit::Hearts));
        board.push_column(1, card(Rank::Six, Suit::Spades));
        for (i, filler) in [
            card(Rank::King, Suit::Diamonds),
            card(Rank::King, Suit::Hearts),
            card(Rank::Queen, Suit::Clubs),
            card(Rank::Queen, Suit::Spades),
            card(Rank::Queen, Suit::Hearts),
        ]
        .into_iter()
        .enumerate()
        {
            board.push_column(3 + i, filler);
        }
        board.put_cell(0, card(Rank::Two, Suit::Clubs));
        board.put_cell(1, card(Rank::Two, Suit::Diamonds));
        board.put_cell(2, card(Rank::Two, Suit::Hearts));

        assert_eq!(move_capacity(&board, false), 4);
        assert_eq!(run_onto_card(&board, 1, 0), Some(4));

        // one card longer: the landing now sits past the bound
        board.push_column(1, card(Rank::Five, Suit::Diamonds));
        assert_eq!(run_onto_card(&board, 1, 0), None);
    }

    #[test]
    fn test_probes_reject_bad_indices() {
        let board = staged();
        assert_eq!(run_onto_card(&board, 1, 1), None);
        assert_eq!(run_onto_card(&board, COLUMNS, 0), None);
        assert_eq!(run_to_empty(&board, 1, COLUMNS), None);
    }
}
