//! Player-intent handling: the selection state machine and target
//! resolution.
//!
//! `select_or_target` is the single inbound mutation path — the host calls
//! it once per tap with the hit-tested [`Spot`]. `cursor_hint` is its pure
//! hover twin, used to pick a cursor without committing anything. Illegal
//! or out-of-range targets are no-ops: the selection survives and the
//! outcome says `Ignored`.

use serde::{Deserialize, Serialize};

use crate::core::{CELLS, COLUMNS, DECK_SIZE, GOALS};
use crate::game::{Game, GameStatus, Spot};
use crate::rules::supermove;

/// What a call to [`Game::select_or_target`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentOutcome {
    /// Nothing happened; the target was empty, illegal, or out of range.
    Ignored,
    /// A card was picked up.
    Selected,
    /// The held card was put back (same spot tapped again); arms autoplay.
    Deselected,
    /// A single card moved to the target; selection cleared, autoplay armed.
    Moved,
    /// A multi-card run moved to the target column; selection cleared,
    /// autoplay armed.
    PowerMoved,
}

/// Cursor class the host should show while hovering a spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorHint {
    Default,
    CanDropHere,
    CanPowerDropHere,
}

impl Game {
    /// Apply one player tap.
    ///
    /// With nothing held, tapping an occupied cell or a non-empty column
    /// picks that card up. With a card held, tapping its own spot puts it
    /// back, tapping a legal target moves it (or its run), and anything
    /// else is ignored.
    pub fn select_or_target(&mut self, spot: Spot) -> IntentOutcome {
        if self.status() != GameStatus::Running {
            return IntentOutcome::Ignored;
        }
        let outcome = match spot {
            Spot::Cell(cell) if cell < CELLS => self.tap_cell(cell),
            Spot::Goal(goal) if goal < GOALS => self.tap_goal(goal),
            Spot::Column(col) if col < COLUMNS => self.tap_column(col),
            _ => IntentOutcome::Ignored,
        };
        debug_assert_eq!(self.board().card_count(), DECK_SIZE);
        outcome
    }

    /// Cursor class for hovering `spot` with the current selection. Pure.
    #[must_use]
    pub fn cursor_hint(&self, spot: Spot) -> CursorHint {
        if self.status() != GameStatus::Running {
            return CursorHint::Default;
        }
        let Some(held) = self.selection() else {
            return CursorHint::Default;
        };
        let Some(card) = self.selected_card() else {
            return CursorHint::Default;
        };

        match spot {
            Spot::Cell(cell) if cell < CELLS => {
                if held != Spot::Cell(cell) && self.board().cell(cell).is_none() {
                    CursorHint::CanDropHere
                } else {
                    CursorHint::Default
                }
            }
            Spot::Goal(goal) if goal < GOALS => {
                if self.board().goal_accepts(goal, card) {
                    CursorHint::CanDropHere
                } else {
                    CursorHint::Default
                }
            }
            Spot::Column(col) if col < COLUMNS => {
                if held == Spot::Column(col) {
                    return CursorHint::Default;
                }
                match (held, self.board().exposed(col)) {
                    (Spot::Column(src), Some(_)) => {
                        match supermove::run_onto_card(self.board(), src, col) {
                            Some(len) if len > 1 => CursorHint::CanPowerDropHere,
                            Some(_) => CursorHint::CanDropHere,
                            None => CursorHint::Default,
                        }
                    }
                    (Spot::Column(src), None) => {
                        if supermove::run_to_empty(self.board(), src, col).is_some() {
                            CursorHint::CanPowerDropHere
                        } else {
                            // any single card may land on an empty column
                            CursorHint::CanDropHere
                        }
                    }
                    (Spot::Cell(_), Some(landing)) => {
                        if card.can_stack_on(landing) {
                            CursorHint::CanDropHere
                        } else {
                            CursorHint::Default
                        }
                    }
                    (Spot::Cell(_), None) => CursorHint::CanDropHere,
                    (Spot::Goal(_), _) => CursorHint::Default,
                }
            }
            _ => CursorHint::Default,
        }
    }

    fn tap_cell(&mut self, cell: usize) -> IntentOutcome {
        match self.selection() {
            None => {
                if self.board().cell(cell).is_some() {
                    self.set_selection(Spot::Cell(cell));
                    IntentOutcome::Selected
                } else {
                    IntentOutcome::Ignored
                }
            }
            Some(Spot::Cell(held)) if held == cell => {
                self.clear_selection();
                IntentOutcome::Deselected
            }
            Some(_) => {
                if self.board().cell(cell).is_some() {
                    return IntentOutcome::Ignored;
                }
                match self.lift_selected() {
                    Some(card) => {
                        self.board_mut().put_cell(cell, card);
                        self.clear_selection();
                        IntentOutcome::Moved
                    }
                    None => IntentOutcome::Ignored,
                }
            }
        }
    }

    fn tap_goal(&mut self, goal: usize) -> IntentOutcome {
        let Some(card) = self.selected_card() else {
            return IntentOutcome::Ignored;
        };
        if !self.board().goal_accepts(goal, card) {
            return IntentOutcome::Ignored;
        }
        let lifted = self.lift_selected();
        debug_assert_eq!(lifted, Some(card));
        self.board_mut().place_goal(goal, card);
        self.clear_selection();
        IntentOutcome::Moved
    }

    fn tap_column(&mut self, col: usize) -> IntentOutcome {
        let Some(held) = self.selection() else {
            return if self.board().exposed(col).is_some() {
                self.set_selection(Spot::Column(col));
                IntentOutcome::Selected
            } else {
                IntentOutcome::Ignored
            };
        };
        if held == Spot::Column(col) {
            self.clear_selection();
            return IntentOutcome::Deselected;
        }

        match (held, self.board().exposed(col)) {
            (Spot::Column(src), Some(_)) => {
                // a run of one is the ordinary single-card move
                match supermove::move_run_onto_card(self.board_mut(), src, col) {
                    Some(len) => {
                        self.clear_selection();
                        if len > 1 {
                            IntentOutcome::PowerMoved
                        } else {
                            IntentOutcome::Moved
                        }
                    }
                    None => IntentOutcome::Ignored,
                }
            }
            (Spot::Column(src), None) => {
                if supermove::move_run_to_empty(self.board_mut(), src, col).is_some() {
                    self.clear_selection();
                    IntentOutcome::PowerMoved
                } else {
                    self.drop_single_onto(col)
                }
            }
            (Spot::Cell(_), Some(landing)) => {
                let Some(card) = self.selected_card() else {
                    return IntentOutcome::Ignored;
                };
                if card.can_stack_on(landing) {
                    self.drop_single_onto(col)
                } else {
                    IntentOutcome::Ignored
                }
            }
            (Spot::Cell(_), None) => self.drop_single_onto(col),
            (Spot::Goal(_), _) => IntentOutcome::Ignored,
        }
    }

    /// Move the held card onto `col` (legality already established).
    fn drop_single_onto(&mut self, col: usize) -> IntentOutcome {
        match self.lift_selected() {
            Some(card) => {
                self.board_mut().push_column(col, card);
                self.clear_selection();
                IntentOutcome::Moved
            }
            None => IntentOutcome::Ignored,
        }
    }
}
