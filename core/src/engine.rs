use core::num::Saturating;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    Toggled,
    Solved,
}

impl ToggleOutcome {
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// One player's game: the board plus the number of activations made on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightsOut {
    board: Board,
    click_count: Saturating<u32>,
}

impl LightsOut {
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            click_count: Saturating(0),
        }
    }

    /// Replays `scramble` on a dark board; the click count starts at zero.
    pub fn from_scramble(scramble: &Scramble) -> Result<Self> {
        let mut board = Board::new();
        scramble.apply(&mut board)?;
        Ok(Self::from_board(board))
    }

    /// Resets the game to a fresh puzzle drawn from `rng` and returns the moves used.
    pub fn generate<R: Rng>(&mut self, difficulty: Difficulty, rng: &mut R) -> Scramble {
        self.board.switch_off_all();

        let scramble = Scramble::random(rng, difficulty, self.board.size());
        for &coords in scramble.moves() {
            // coordinates come from the board size, so this cannot fail
            let _ = self.activate(coords);
        }
        self.click_count = Saturating(0);
        log::debug!("Generated puzzle with {} lights on", self.board.lit_count());

        scramble
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn click_count(&self) -> u32 {
        self.click_count.0
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.board.is_lit(coords)
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_dark()
    }

    pub fn activate(&mut self, coords: Coord2) -> Result<ToggleOutcome> {
        self.board.toggle_cross(coords)?;
        self.click_count += 1;

        Ok(if self.is_solved() {
            ToggleOutcome::Solved
        } else {
            ToggleOutcome::Toggled
        })
    }

    pub fn export_view(&self) -> BoardView {
        BoardView::from_engine(self)
    }
}

impl Default for LightsOut {
    fn default() -> Self {
        Self::new()
    }
}
