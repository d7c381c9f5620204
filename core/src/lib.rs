use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use grid::*;
pub use placement::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod grid;
mod placement;
mod session;
mod types;

/// Smallest accepted grid width.
pub const MIN_GRID_WIDTH: Coord = 2;
/// Smallest accepted grid height.
pub const MIN_GRID_HEIGHT: Coord = 2;
/// Clamping range for the mine load factor, applied by [`GridConfig::sanitized`].
pub const MIN_MINE_LOAD_FACTOR: f64 = 0.01;
pub const MAX_MINE_LOAD_FACTOR: f64 = 0.99;

const DEFAULT_GRID_SIZE: Coord2 = (20, 20);
const DEFAULT_MINE_LOAD_FACTOR: f64 = 0.25;

/// Dimensions and mine density for one grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Coord2,
    /// Target fraction of cells holding a mine, expected in `(0, 1)`.
    pub mine_load_factor: f64,
}

impl GridConfig {
    pub const fn new_unchecked(size: Coord2, mine_load_factor: f64) -> Self {
        Self {
            size,
            mine_load_factor,
        }
    }

    /// Strict constructor; see [`GridConfig::validate`] for the rules.
    pub fn new(size: Coord2, mine_load_factor: f64) -> Result<Self> {
        let config = Self::new_unchecked(size, mine_load_factor);
        config.validate()?;
        Ok(config)
    }

    /// Lenient constructor: clamps every field into its accepted range
    /// instead of failing, for callers wiring up raw user settings.
    pub fn sanitized(size: Coord2, mine_load_factor: f64) -> Self {
        let mine_load_factor = if mine_load_factor.is_finite() {
            mine_load_factor.clamp(MIN_MINE_LOAD_FACTOR, MAX_MINE_LOAD_FACTOR)
        } else {
            DEFAULT_MINE_LOAD_FACTOR
        };

        Self {
            size: (size.0.max(MIN_GRID_WIDTH), size.1.max(MIN_GRID_HEIGHT)),
            mine_load_factor,
        }
    }

    /// Checks the construction contract: both dimensions at or above the
    /// minimum and a finite load factor. The load factor's range is the
    /// caller's responsibility and is deliberately not clamped here.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 < MIN_GRID_WIDTH {
            return Err(GridError::WidthBelowMinimum(self.size.0));
        }
        if self.size.1 < MIN_GRID_HEIGHT {
            return Err(GridError::HeightBelowMinimum(self.size.1));
        }
        if !self.mine_load_factor.is_finite() {
            return Err(GridError::LoadFactorNotFinite);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Mines to place: `floor(mine_load_factor * total_cells)`.
    pub fn mine_count(&self) -> CellCount {
        let count = (self.mine_load_factor * f64::from(self.total_cells())).floor();
        count.clamp(0.0, f64::from(CellCount::MAX)) as CellCount
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_GRID_SIZE, DEFAULT_MINE_LOAD_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_constructor_enforces_minimums_and_finiteness() {
        assert!(GridConfig::new((2, 2), 0.25).is_ok());
        assert_eq!(
            GridConfig::new((1, 8), 0.25),
            Err(GridError::WidthBelowMinimum(1))
        );
        assert_eq!(
            GridConfig::new((8, 0), 0.25),
            Err(GridError::HeightBelowMinimum(0))
        );
        assert_eq!(
            GridConfig::new((8, 8), f64::NAN),
            Err(GridError::LoadFactorNotFinite)
        );
        // out-of-range but finite load factors are the caller's problem
        assert!(GridConfig::new((8, 8), 1.5).is_ok());
    }

    #[test]
    fn sanitized_clamps_into_the_accepted_ranges() {
        let config = GridConfig::sanitized((0, 1), 3.0);
        assert_eq!(config.size, (MIN_GRID_WIDTH, MIN_GRID_HEIGHT));
        assert_eq!(config.mine_load_factor, MAX_MINE_LOAD_FACTOR);

        let config = GridConfig::sanitized((30, 30), 0.0001);
        assert_eq!(config.size, (30, 30));
        assert_eq!(config.mine_load_factor, MIN_MINE_LOAD_FACTOR);

        let config = GridConfig::sanitized((5, 5), f64::INFINITY);
        assert_eq!(config.mine_load_factor, DEFAULT_MINE_LOAD_FACTOR);
    }

    #[test]
    fn mine_count_is_the_floor_of_the_product() {
        assert_eq!(GridConfig::new((2, 2), 0.25).unwrap().mine_count(), 1);
        assert_eq!(GridConfig::new((20, 20), 0.25).unwrap().mine_count(), 100);
        assert_eq!(GridConfig::new((3, 3), 0.99).unwrap().mine_count(), 8);
        assert_eq!(GridConfig::new((5, 5), 0.039).unwrap().mine_count(), 0);
    }

    #[test]
    fn default_config_matches_the_classic_board() {
        let config = GridConfig::default();
        assert_eq!(config.size, (20, 20));
        assert_eq!(config.mine_load_factor, 0.25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GridConfig::new((16, 30), 0.2).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
