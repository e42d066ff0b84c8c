//! Partial board state encoded as three column bitmasks

use super::BoardSize;
use std::fmt;

/// Queens placed on the first `level` rows.
///
/// `columns` holds the occupied columns; `left_threat` and `right_threat` hold
/// the columns of the *next* row attacked along each diagonal. Bits above the
/// board width may be set by the shifts and are masked off when tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardState {
    pub level: u32,
    pub columns: u32,
    pub left_threat: u32,
    pub right_threat: u32,
}

impl BoardState {
    /// Empty board: no queens, no occupancy, no threats
    pub const EMPTY: BoardState = BoardState {
        level: 0,
        columns: 0,
        left_threat: 0,
        right_threat: 0,
    };

    pub fn new(level: u32, columns: u32, left_threat: u32, right_threat: u32) -> Self {
        Self {
            level,
            columns,
            left_threat,
            right_threat,
        }
    }

    /// Columns of the current row that cannot take a queen
    #[inline]
    pub fn excluded(&self, size: BoardSize) -> u32 {
        (self.columns | self.left_threat | self.right_threat) & size.full_mask()
    }

    /// Columns of the current row that can take a queen
    #[inline]
    pub fn available(&self, size: BoardSize) -> u32 {
        !self.excluded(size) & size.full_mask()
    }

    /// Child state with a queen placed on column bit `newq` of the current row
    #[inline]
    pub fn place(&self, newq: u32) -> Self {
        Self {
            level: self.level + 1,
            columns: self.columns | newq,
            left_threat: (self.left_threat | newq) << 1,
            right_threat: (self.right_threat | newq) >> 1,
        }
    }

    /// Candidate columns of the current row, highest bit first
    pub fn candidates(&self, size: BoardSize) -> Candidates {
        Candidates {
            remaining: self.available(size),
        }
    }

    /// Wrap the state with a board width so it can be displayed
    pub fn display(&self, size: BoardSize) -> StateDisplay<'_> {
        StateDisplay { state: self, size }
    }
}

/// Iterator over single-bit column masks, from the highest column down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates {
    remaining: u32,
}

impl Candidates {
    /// Columns not yet yielded
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Iterator for Candidates {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let newq = 1u32 << (u32::BITS - 1 - self.remaining.leading_zeros());
        self.remaining &= !newq;
        Some(newq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Candidates {}

/// Render the low `nbits` bits of `value` as a binary string, most
/// significant first.
pub fn format_mask(value: u32, nbits: u32) -> String {
    let nbits = nbits.min(u32::BITS);
    (0..nbits)
        .rev()
        .map(|bit| if value & (1 << bit) != 0 { '1' } else { '0' })
        .collect()
}

/// `Display` adapter for a [`BoardState`] at a given board width
pub struct StateDisplay<'a> {
    state: &'a BoardState,
    size: BoardSize,
}

impl fmt::Display for StateDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.get();
        write!(
            f,
            "<col: {}  ld: {}  rd: {}>",
            format_mask(self.state.columns, n),
            format_mask(self.state.left_threat, n),
            format_mask(self.state.right_threat, n),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u32) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    #[test]
    fn test_place_shifts_threats() {
        let state = BoardState::EMPTY.place(0b0100);
        assert_eq!(state.level, 1);
        assert_eq!(state.columns, 0b0100);
        assert_eq!(state.left_threat, 0b1000);
        assert_eq!(state.right_threat, 0b0010);

        let next = state.place(0b0001);
        assert_eq!(next.level, 2);
        assert_eq!(next.columns, 0b0101);
        assert_eq!(next.left_threat, 0b10010);
        assert_eq!(next.right_threat, 0b0001);
    }

    #[test]
    fn test_place_does_not_mutate_parent() {
        let parent = BoardState::EMPTY.place(0b10);
        let _child = parent.place(0b1000);
        assert_eq!(parent, BoardState::new(1, 0b10, 0b100, 0b1));
    }

    #[test]
    fn test_level_matches_column_count() {
        let mut state = BoardState::EMPTY;
        for newq in [0b0010, 0b1000, 0b0001, 0b0100] {
            state = state.place(newq);
            assert_eq!(state.level, state.columns.count_ones());
        }
    }

    #[test]
    fn test_excluded_ignores_bits_above_board() {
        let board = size(4);
        let state = BoardState::new(1, 0b1000, 0b1_0000, 0b0100);
        assert_eq!(state.excluded(board), 0b1100);
        assert_eq!(state.available(board), 0b0011);
    }

    #[test]
    fn test_candidates_highest_first() {
        let board = size(5);
        let state = BoardState::new(1, 0b00100, 0b01000, 0b00010);
        let columns: Vec<u32> = state.candidates(board).collect();
        assert_eq!(columns, vec![0b10000, 0b00001]);
        assert_eq!(state.candidates(board).len(), 2);
    }

    #[test]
    fn test_candidates_on_empty_board() {
        let board = size(3);
        let columns: Vec<u32> = BoardState::EMPTY.candidates(board).collect();
        assert_eq!(columns, vec![0b100, 0b010, 0b001]);
    }

    #[test]
    fn test_format_mask() {
        assert_eq!(format_mask(0b101, 3), "101");
        assert_eq!(format_mask(0b101, 5), "00101");
        assert_eq!(format_mask(0b1101, 2), "01");
        assert_eq!(format_mask(0, 0), "");
        assert_eq!(format_mask(u32::MAX, 40).len(), 32);
    }

    #[test]
    fn test_state_display() {
        let state = BoardState::EMPTY.place(0b0100);
        assert_eq!(
            state.display(size(4)).to_string(),
            "<col: 0100  ld: 1000  rd: 0010>"
        );
    }
}
