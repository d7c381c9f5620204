use ndarray::Array2;
use rand::prelude::*;

use crate::*;

/// Decides which cells of a freshly built grid hold mines.
pub trait MinePlacement {
    fn place(self, config: GridConfig) -> Array2<bool>;
}

/// Uniform placement: every subset of `mine_count` cells is equally likely.
///
/// All grid coordinates are enumerated once in column-major order, permuted
/// with a single-pass Fisher-Yates shuffle, and the first `mine_count`
/// entries become mines. The seed is explicit so callers (and tests) control
/// determinism.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShufflePlacement {
    seed: u64,
}

impl ShufflePlacement {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::make_rng::<SmallRng>().next_u64())
    }
}

impl MinePlacement for ShufflePlacement {
    fn place(self, config: GridConfig) -> Array2<bool> {
        let (width, height) = config.size;
        let total_cells = config.total_cells();
        let mine_count = config.mine_count();

        // defend against unchecked configs with load factor >= 1
        if mine_count >= total_cells {
            if mine_count > total_cells {
                log::warn!(
                    "mine count {mine_count} exceeds the {total_cells} available cells, filling the whole grid"
                );
            }
            return Array2::from_elem((width, height).to_nd_index(), true);
        }

        let mut coords: Vec<Coord2> = (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        coords.shuffle(&mut rng);

        let mut mine_mask: Array2<bool> = Array2::default((width, height).to_nd_index());
        for &mined in &coords[..usize::from(mine_count)] {
            mine_mask[mined.to_nd_index()] = true;
        }
        mine_mask
    }
}
