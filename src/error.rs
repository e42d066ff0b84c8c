//! Error types for the N-queens counter

use thiserror::Error;

/// Errors raised by the library before or around a search.
///
/// The search itself never fails: once a [`crate::board::BoardSize`] exists,
/// counting is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueensError {
    /// Board size is zero or does not fit in the bitmask width
    #[error("invalid board size {size}: must be between 1 and {max}")]
    InvalidBoardSize { size: u32, max: u32 },

    /// Brute-force reference refuses boards whose permutation count explodes
    #[error("reference counter supports boards up to {max}, got {size}")]
    ReferenceTooLarge { size: u32, max: u32 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type QueensResult<T> = std::result::Result<T, QueensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QueensError::InvalidBoardSize { size: 0, max: 31 };
        assert_eq!(err.to_string(), "invalid board size 0: must be between 1 and 31");

        let err = QueensError::ReferenceTooLarge { size: 12, max: 10 };
        assert!(err.to_string().contains("up to 10"));
    }
}
