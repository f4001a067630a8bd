use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates ({0}, {1}) are outside the board")]
    OutOfBounds(Coord, Coord),
    #[error("Board shape does not match the fixed board size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Returned when a component identifier does not follow the `cell-<x>-<y>` pattern.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Malformed cell identifier")]
pub struct ParseCellIdError;
