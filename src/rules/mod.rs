//! Move rules beyond single-card legality.
//!
//! - `supermove`: the multi-card "power move" — capacity formula, bounded
//!   run walk, and the probe/apply pairs for both destination variants
//! - `autoplay`: the fixed-point sweep that settles obviously-safe cards
//!   onto the foundations
//!
//! Everything here operates on a [`Board`](crate::core::Board); the `game`
//! layer decides *when* these rules run.

pub mod autoplay;
pub mod supermove;

pub use autoplay::autoplay;
pub use supermove::{
    move_capacity, move_run_onto_card, move_run_to_empty, run_onto_card, run_to_empty,
};
