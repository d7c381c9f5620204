/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

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

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// The 8 compass displacements around a cell, in reading order.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let next_x = coords.0.checked_add_signed(delta.0)?;
    let next_y = coords.1.checked_add_signed(delta.1)?;

    (next_x < bounds.0 && next_y < bounds.1).then_some((next_x, next_y))
}

/// Iterates the in-bounds coordinates of the up-to-8 cells around `center`.
///
/// A corner yields 3 items, an edge 5, an interior cell all 8. Coordinates
/// are never repeated and never leave `[0, bounds.0) x [0, bounds.1)`.
pub fn neighbours_of(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS
        .into_iter()
        .filter_map(move |delta| apply_delta(center, delta, bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_edge_and_interior_neighbour_counts() {
        let bounds = (5, 5);

        assert_eq!(neighbours_of((0, 0), bounds).count(), 3);
        assert_eq!(neighbours_of((0, 2), bounds).count(), 5);
        assert_eq!(neighbours_of((2, 2), bounds).count(), 8);
    }

    #[test]
    fn neighbours_are_unique_and_in_bounds() {
        let bounds = (3, 2);
        let collected: Vec<_> = neighbours_of((2, 1), bounds).collect();

        assert_eq!(collected.len(), 3);
        for (x, y) in &collected {
            assert!(*x < bounds.0 && *y < bounds.1);
        }
        for (i, a) in collected.iter().enumerate() {
            assert!(!collected[i + 1..].contains(a));
        }
    }

    #[test]
    fn saturating_area_product() {
        assert_eq!(mult(255, 255), 65025);
        assert_eq!(mult(20, 20), 400);
    }
}
