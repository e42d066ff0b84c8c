//! Validated board size

use crate::error::{QueensError, QueensResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest board whose columns fit in a `u32` mask with room for the shifts.
pub const MAX_BOARD_SIZE: u32 = u32::BITS - 1;

/// Board size N together with its full-occupancy mask.
///
/// A `BoardSize` can only be built for `1..=MAX_BOARD_SIZE`, so every search
/// that receives one may shift by `N - 1` without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BoardSize {
    n: u32,
    full: u32,
}

impl BoardSize {
    /// Validate `n` and precompute the full mask
    pub fn new(n: u32) -> QueensResult<Self> {
        if n == 0 || n > MAX_BOARD_SIZE {
            return Err(QueensError::InvalidBoardSize {
                size: n,
                max: MAX_BOARD_SIZE,
            });
        }

        Ok(Self {
            n,
            full: (1u32 << n) - 1,
        })
    }

    /// Number of rows (and columns)
    #[inline]
    pub fn get(self) -> u32 {
        self.n
    }

    /// Mask with exactly the low N bits set
    #[inline]
    pub fn full_mask(self) -> u32 {
        self.full
    }

    /// Bit for the highest column, where candidate iteration starts
    #[inline]
    pub fn top_column(self) -> u32 {
        1 << (self.n - 1)
    }

    /// Level at which a free column means a completed placement
    #[inline]
    pub fn last_level(self) -> u32 {
        self.n - 1
    }

    /// Mirror a column mask left to right within the board width
    pub fn mirror(self, mask: u32) -> u32 {
        (mask & self.full).reverse_bits() >> (u32::BITS - self.n)
    }
}

impl TryFrom<u32> for BoardSize {
    type Error = QueensError;

    fn try_from(n: u32) -> QueensResult<Self> {
        Self::new(n)
    }
}

impl From<BoardSize> for u32 {
    fn from(size: BoardSize) -> u32 {
        size.n
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.n, self.n)
    }
}
