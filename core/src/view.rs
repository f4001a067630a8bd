use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStyle {
    Lit,
    Unlit,
}

impl From<bool> for CellStyle {
    fn from(lit: bool) -> Self {
        if lit { Self::Lit } else { Self::Unlit }
    }
}

/// Stable identifier for a cell, rendered as `cell-<x>-<y>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(Coord2);

impl CellId {
    pub const fn new(coords: Coord2) -> Self {
        Self(coords)
    }

    pub const fn coords(self) -> Coord2 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}-{}", self.0.0, self.0.1)
    }
}

impl FromStr for CellId {
    type Err = ParseCellIdError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let (x, y) = s
            .strip_prefix("cell-")
            .and_then(|rest| rest.split_once('-'))
            .ok_or(ParseCellIdError)?;
        Ok(Self((parse_index(x)?, parse_index(y)?)))
    }
}

fn parse_index(digits: &str) -> core::result::Result<Coord, ParseCellIdError> {
    // `u8::from_str` alone would also accept a leading `+`
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseCellIdError);
    }
    digits.parse().map_err(|_| ParseCellIdError)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub coords: Coord2,
    pub style: CellStyle,
    pub id: CellId,
    pub enabled: bool,
}

/// Row-major projection of a board for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    rows: Vec<Vec<CellView>>,
}

impl BoardView {
    pub fn from_engine(engine: &LightsOut) -> Self {
        Self::from_board(engine.board())
    }

    pub fn from_board(board: &Board) -> Self {
        let (x_end, y_end) = board.size();
        let rows = (0..x_end)
            .map(|x| {
                (0..y_end)
                    .map(|y| {
                        let coords = (x, y);
                        CellView {
                            coords,
                            style: board.is_lit(coords).into(),
                            id: CellId::new(coords),
                            enabled: true,
                        }
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellView> {
        self.rows.iter().flatten()
    }

    pub fn cell(&self, (x, y): Coord2) -> Option<&CellView> {
        self.rows.get(usize::from(x))?.get(usize::from(y))
    }

    pub fn disable_all(&mut self) {
        self.rows
            .iter_mut()
            .flatten()
            .for_each(|cell| cell.enabled = false);
    }
}
