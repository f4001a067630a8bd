use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Activations replayed on a dark board to produce a puzzle.
///
/// Every activation is its own inverse, so replaying the same moves on the
/// scrambled board switches every light off again.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scramble {
    moves: Vec<Coord2>,
}

impl Scramble {
    pub fn from_moves(moves: Vec<Coord2>) -> Self {
        Self { moves }
    }

    /// Draws a step count from `difficulty` and that many uniformly random cells.
    pub fn random<R: Rng>(rng: &mut R, difficulty: Difficulty, size: Coord2) -> Self {
        let steps = rng.random_range(difficulty.scramble_steps());
        let moves: Vec<Coord2> = (0..steps)
            .map(|_| (rng.random_range(0..size.0), rng.random_range(0..size.1)))
            .collect();

        log::debug!("Scrambling {difficulty} board with {steps} moves");
        Self { moves }
    }

    pub fn moves(&self) -> &[Coord2] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Toggles every move onto `board`, stopping at the first invalid one.
    pub fn apply(&self, board: &mut Board) -> Result<()> {
        for &coords in &self.moves {
            board.toggle_cross(coords)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn random_scramble_stays_within_step_range() {
        for difficulty in Difficulty::ALL {
            let range = difficulty.scramble_steps();
            for seed in 0..200 {
                let mut rng = SmallRng::seed_from_u64(seed);
                let scramble = Scramble::random(&mut rng, difficulty, (BOARD_SIZE, BOARD_SIZE));
                assert!(range.contains(&(scramble.len() as u8)), "{difficulty}: {}", scramble.len());
            }
        }
    }

    #[test]
    fn random_scramble_only_picks_cells_on_the_board() {
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..100 {
            let scramble = Scramble::random(&mut rng, Difficulty::Hard, (BOARD_SIZE, BOARD_SIZE));
            assert!(
                scramble
                    .moves()
                    .iter()
                    .all(|&(x, y)| x < BOARD_SIZE && y < BOARD_SIZE)
            );
        }
    }

    #[test]
    fn same_seed_gives_same_scramble() {
        let a = Scramble::random(&mut SmallRng::seed_from_u64(42), Difficulty::Normal, (5, 5));
        let b = Scramble::random(&mut SmallRng::seed_from_u64(42), Difficulty::Normal, (5, 5));

        assert_eq!(a, b);
    }

    #[test]
    fn applying_twice_restores_dark_board() {
        let scramble = Scramble::from_moves(vec![(0, 0), (2, 3), (4, 4), (2, 3)]);
        let mut board = Board::new();

        scramble.apply(&mut board).unwrap();
        assert!(!board.is_dark());
        scramble.apply(&mut board).unwrap();
        assert!(board.is_dark());
    }

    #[test]
    fn apply_rejects_out_of_bounds_move() {
        let scramble = Scramble::from_moves(vec![(1, 1), (5, 2)]);
        let mut board = Board::new();

        assert_eq!(scramble.apply(&mut board), Err(GameError::OutOfBounds(5, 2)));
    }
}
