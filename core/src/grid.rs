use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The minefield and per-cell state for one game.
///
/// A `Grid` exclusively owns its cells. The mine layout is fixed at
/// construction and never mutates afterwards; only cell states change.
/// Construction is atomic: a `Grid` either exists fully validated or not
/// at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    mine_mask: Array2<bool>,
    states: Array2<CellState>,
    mine_count: CellCount,
    flag_count: CellCount,
}

impl Grid {
    /// Builds a grid for `config`, delegating mine placement to `placer`.
    pub fn generate<P: MinePlacement>(config: GridConfig, placer: P) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_mine_mask(placer.place(config)))
    }

    /// Builds a grid with mines at exactly the given coordinates.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GridError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        let states = Array2::default(mine_mask.dim());

        Self {
            mine_mask,
            states,
            mine_count,
            flag_count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mine_mask.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    /// The fixed number of mined cells, decided at construction.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// How many cells currently carry a flag.
    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// The cell at `(x, y)`, or `None` when the coordinates fall outside the
    /// grid. An out-of-bounds lookup is a normal negative result, not an
    /// error.
    pub fn cell(&self, x: Coord, y: Coord) -> Option<Cell<'_>> {
        self.in_bounds((x, y)).then(|| Cell::new(self, (x, y)))
    }

    /// Mutable counterpart of [`Grid::cell`].
    pub fn cell_mut(&mut self, x: Coord, y: Coord) -> Option<CellMut<'_>> {
        self.in_bounds((x, y))
            .then(move || CellMut::new(self, (x, y)))
    }

    /// All cells in column-major order (x outer, y inner).
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> {
        let (width, height) = self.size();
        (0..width).flat_map(move |x| (0..height).map(move |y| Cell::new(self, (x, y))))
    }

    fn in_bounds(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub(crate) fn mine_at(&self, coords: Coord2) -> bool {
        self.mine_mask[coords.to_nd_index()]
    }

    pub(crate) fn state_at(&self, coords: Coord2) -> CellState {
        self.states[coords.to_nd_index()]
    }

    pub(crate) fn set_state(&mut self, coords: Coord2, state: CellState) {
        self.states[coords.to_nd_index()] = state;
    }

    pub(crate) fn flag_added(&mut self) {
        self.flag_count = self.flag_count.saturating_add(1);
    }

    pub(crate) fn flag_removed(&mut self) {
        self.flag_count = self.flag_count.saturating_sub(1);
    }
}
