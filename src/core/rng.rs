//! Deterministic deal randomness.
//!
//! ## Key Features
//!
//! - **Bit-exact**: reproduces the classic Microsoft FreeCell dealer,
//!   `state = (state * 214013 + 2531011) mod 2^31`, draw = `state >> 16`,
//!   so "game #N" means the same layout everywhere, forever.
//! - **Seeded from the game number**: the `i32` game number is the entire
//!   persistence format; negative seeds are well-defined (two's-complement
//!   arithmetic followed by the 31-bit mask, matching the reference).
//! - **Capturable**: the state is a single word, exposed via
//!   `state()`/`from_state()`.
//!
//! ```
//! use freecell_core::DealRng;
//!
//! let mut rng = DealRng::new(1);
//! assert_eq!(rng.next_draw(), 41);
//! assert_eq!(rng.next_draw(), 18467);
//! ```

use serde::{Deserialize, Serialize};

/// The linear congruential generator behind [`Board::deal`].
///
/// [`Board::deal`]: crate::core::Board::deal
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRng {
    state: i64,
}

impl DealRng {
    /// Seed the generator from a game number.
    #[must_use]
    pub const fn new(seed: i32) -> Self {
        Self { state: seed as i64 }
    }

    /// Advance the recurrence and return the next draw (`0..=0x7FFF`).
    pub fn next_draw(&mut self) -> i64 {
        self.state = (self.state * 214013 + 2531011) & 0x7FFF_FFFF;
        self.state >> 16
    }

    /// Current generator state.
    #[must_use]
    pub const fn state(&self) -> i64 {
        self.state
    }

    /// Restore a generator from a captured state.
    #[must_use]
    pub const fn from_state(state: i64) -> Self {
        Self { state }
    }
}
