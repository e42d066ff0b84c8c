//! Board size and bitmask-encoded partial board states

pub mod size;
pub mod state;

pub use size::{BoardSize, MAX_BOARD_SIZE};
pub use state::{format_mask, BoardState};
