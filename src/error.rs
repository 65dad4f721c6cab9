use std::collections::TryReserveError;

use thiserror::Error;

/// Reasons a tile sequence cannot be turned into a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected at least 9 digits, found {found}")]
    TooFewDigits { found: usize },

    #[error("tile {tile} is out of range, tiles must be 0..=8")]
    TileOutOfRange { tile: u8 },

    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },

    #[error("board has no blank tile (0)")]
    MissingBlank,
}

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("out of memory while growing the search frontier")]
    OutOfMemory(#[from] TryReserveError),

    #[error("invalid search configuration: {reason}")]
    InvalidConfig { reason: &'static str },
}
