use core::time::Duration;
use web_time::Instant;

use crate::*;

/// Direction of an aim movement, as driven by the input layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AimDirection {
    Up,
    Down,
    Left,
    Right,
}

/// One game in progress: the grid plus the player-facing cursor state.
///
/// This is the explicit owner of the single active [`Grid`]; starting a new
/// game means replacing the whole session. Nothing here is process-global.
#[derive(Debug)]
pub struct GameSession {
    grid: Grid,
    aim: Coord2,
    started_at: Instant,
}

impl GameSession {
    /// Starts a session with an entropy-seeded mine layout.
    pub fn new(config: GridConfig) -> Result<Self> {
        Self::with_placement(config, ShufflePlacement::from_entropy())
    }

    /// Starts a session with a caller-supplied placement, e.g. a seeded one.
    pub fn with_placement<P: MinePlacement>(config: GridConfig, placer: P) -> Result<Self> {
        Ok(Self {
            grid: Grid::generate(config, placer)?,
            aim: (0, 0),
            started_at: Instant::now(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Coordinates of the currently aimed-at cell, always in bounds.
    pub fn aim(&self) -> Coord2 {
        self.aim
    }

    /// Moves the aim one cell (three when `fast`), clamped to the grid, and
    /// returns the new position.
    pub fn move_aim(&mut self, direction: AimDirection, fast: bool) -> Coord2 {
        use AimDirection::*;

        let step: Coord = if fast { 3 } else { 1 };
        let (max_x, max_y) = (self.grid.width() - 1, self.grid.height() - 1);
        let (x, y) = self.aim;

        self.aim = match direction {
            Up => (x, y.saturating_sub(step)),
            Down => (x, y.saturating_add(step).min(max_y)),
            Left => (x.saturating_sub(step), y),
            Right => (x.saturating_add(step).min(max_x), y),
        };
        self.aim
    }

    /// The cell under the aim.
    pub fn aimed_cell(&self) -> Cell<'_> {
        let (x, y) = self.aim;
        self.grid.cell(x, y).expect("aim is kept in bounds")
    }

    /// Toggles the flag on the aimed-at cell.
    pub fn toggle_flag(&mut self) -> FlagOutcome {
        let (x, y) = self.aim;
        let outcome = match self.grid.cell_mut(x, y) {
            Some(mut cell) => cell.toggle_flag(),
            None => FlagOutcome::NoChange,
        };
        if outcome.has_update() {
            log::debug!("flag toggled at ({x}, {y}): {outcome:?}");
        }
        outcome
    }

    /// Opens the aimed-at cell.
    pub fn open(&mut self) -> OpenOutcome {
        let (x, y) = self.aim;
        let outcome = match self.grid.cell_mut(x, y) {
            Some(mut cell) => cell.open(),
            None => OpenOutcome::AlreadyOpen,
        };
        if outcome.has_update() {
            log::debug!("opened cell at ({x}, {y})");
        }
        outcome
    }

    pub fn flags_placed(&self) -> CellCount {
        self.grid.flag_count()
    }

    /// Mines not yet accounted for by flags; negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        self.grid.mine_count() as isize - self.grid.flag_count() as isize
    }

    /// Time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}
