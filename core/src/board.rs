use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of lights, `true` meaning the light is on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Board {
    lights: Array2<bool>,
}

impl Board {
    /// All-off board of `BOARD_SIZE` × `BOARD_SIZE` cells.
    pub fn new() -> Self {
        Self {
            lights: Array2::default((BOARD_SIZE, BOARD_SIZE).to_nd_index()),
        }
    }

    /// Board with exactly the given cells switched on.
    pub fn from_lit_coords(lit_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new();

        for &coords in lit_coords {
            let coords = board.validate_coords(coords)?;
            board.lights[coords.to_nd_index()] = true;
        }

        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        (BOARD_SIZE, BOARD_SIZE)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords.0, coords.1))
        }
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn lit_count(&self) -> usize {
        self.lights.iter().filter(|&&lit| lit).count()
    }

    pub fn is_dark(&self) -> bool {
        self.lights.iter().all(|&lit| !lit)
    }

    /// Flips the cell at `coords` together with its orthogonal neighbors.
    pub fn toggle_cross(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;

        for pos in self.lights.iter_cross(coords) {
            let light = &mut self.lights[pos.to_nd_index()];
            *light = !*light;
        }

        Ok(())
    }

    pub fn switch_off_all(&mut self) {
        self.lights.fill(false);
    }

    /// Iterates all coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (size_x, size_y) = self.size();
        (0..size_x).flat_map(move |x| (0..size_y).map(move |y| (x, y)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Array2<bool>> for Board {
    type Error = GameError;

    fn try_from(lights: Array2<bool>) -> Result<Self> {
        if lights.dim() != (usize::from(BOARD_SIZE), usize::from(BOARD_SIZE)) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { lights })
    }
}

impl From<Board> for Array2<bool> {
    fn from(board: Board) -> Self {
        board.lights
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.lights[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn lit_cells(board: &Board) -> Vec<Coord2> {
        board.iter_coords().filter(|&pos| board.is_lit(pos)).collect()
    }

    #[test]
    fn new_board_is_dark_and_square() {
        let board = Board::new();

        assert!(board.is_dark());
        assert_eq!(board.size(), (BOARD_SIZE, BOARD_SIZE));
        assert_eq!(board.iter_coords().count(), 25);
    }

    #[test]
    fn toggle_cross_flips_center_and_neighbors() {
        let mut board = Board::new();

        board.toggle_cross((2, 2)).unwrap();

        assert_eq!(lit_cells(&board), [(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]);
    }

    #[test]
    fn toggle_cross_turns_lit_cells_off() {
        let mut board = Board::from_lit_coords(&[(0, 0), (0, 1), (1, 0)]).unwrap();

        board.toggle_cross((0, 0)).unwrap();

        assert!(board.is_dark());
    }

    #[test]
    fn toggle_cross_rejects_out_of_bounds_without_changes() {
        let mut board = Board::from_lit_coords(&[(4, 4)]).unwrap();
        let before = board.clone();

        assert_eq!(board.toggle_cross((5, 0)), Err(GameError::OutOfBounds(5, 0)));
        assert_eq!(board.toggle_cross((0, 5)), Err(GameError::OutOfBounds(0, 5)));
        assert_eq!(board, before);
    }

    #[test]
    fn from_lit_coords_rejects_outside_cells() {
        assert_eq!(
            Board::from_lit_coords(&[(1, 1), (9, 9)]),
            Err(GameError::OutOfBounds(9, 9))
        );
    }

    #[test]
    fn deserialize_rejects_wrong_shape() {
        let json = serde_json::to_string(&Array2::from_elem([2, 3], false)).unwrap();

        assert!(serde_json::from_str::<Board>(&json).is_err());
    }

    #[test]
    fn serde_keeps_lit_cells() {
        let board = Board::from_lit_coords(&[(0, 4), (2, 3)]).unwrap();
        let json = serde_json::to_string(&board).unwrap();

        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn single_lit_cell_is_not_dark() {
        let board = Board::from_lit_coords(&[(3, 1)]).unwrap();

        assert!(!board.is_dark());
        assert_eq!(board.lit_count(), 1);
    }
}
