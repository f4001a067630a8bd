use ndarray::Array2;

/// Single coordinate axis used for board dimensions and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(x, y)`, `x` being the row and `y` the column.
pub type Coord2 = (Coord, Coord);

/// Side length of every Lights Out board.
pub const BOARD_SIZE: Coord = 5;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub trait CrossIterExt {
    /// Iterates the cell at `index` followed by its in-bounds orthogonal neighbors.
    fn iter_cross(&self, index: Coord2) -> CrossIter;
}

impl<T> CrossIterExt for Array2<T> {
    fn iter_cross(&self, index: Coord2) -> CrossIter {
        let dim = self.dim();
        let size = (
            dim.0.try_into().unwrap_or(Coord::MAX),
            dim.1.try_into().unwrap_or(Coord::MAX),
        );
        CrossIter::new(index, size)
    }
}

const CROSS: [(i8, i8); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

#[derive(Debug)]
pub struct CrossIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl CrossIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for CrossIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *CROSS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn cross(center: Coord2) -> Vec<Coord2> {
        CrossIter::new(center, (BOARD_SIZE, BOARD_SIZE)).collect()
    }

    #[test]
    fn center_cross_has_five_cells() {
        assert_eq!(cross((2, 2)), [(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]);
    }

    #[test]
    fn corner_cross_skips_out_of_bounds_neighbors() {
        assert_eq!(cross((0, 0)), [(0, 0), (1, 0), (0, 1)]);
        assert_eq!(cross((4, 4)), [(4, 4), (3, 4), (4, 3)]);
    }

    #[test]
    fn edge_cross_has_four_cells() {
        assert_eq!(cross((0, 2)), [(0, 2), (1, 2), (0, 1), (0, 3)]);
    }
}
