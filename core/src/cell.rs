use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a single grid cell.
///
/// `Open` is terminal: no transition leaves it. Flags only exist while a
/// cell is hidden, which this encoding makes structural.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Open,
}

impl CellState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    NoChange,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OpenOutcome {
    Opened,
    /// The cell was already open; `open` is idempotent.
    AlreadyOpen,
    /// The cell is flagged and must be unflagged before opening.
    Flagged,
}

impl OpenOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Opened)
    }
}

/// Shared view of one cell: its coordinates plus a non-owning handle to the
/// grid, so neighbour and degree queries stay available.
#[derive(Copy, Clone, Debug)]
pub struct Cell<'a> {
    grid: &'a Grid,
    coords: Coord2,
}

impl<'a> Cell<'a> {
    pub(crate) fn new(grid: &'a Grid, coords: Coord2) -> Self {
        Self { grid, coords }
    }

    pub fn coords(&self) -> Coord2 {
        self.coords
    }

    pub fn x(&self) -> Coord {
        self.coords.0
    }

    pub fn y(&self) -> Coord {
        self.coords.1
    }

    pub fn state(&self) -> CellState {
        self.grid.state_at(self.coords)
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn has_flag(&self) -> bool {
        self.state().is_flagged()
    }

    /// Whether this cell holds a mine.
    ///
    /// Caller contract: a rendering layer must only consult this after the
    /// cell is open, or it leaks mine locations. The core does not enforce
    /// that.
    pub fn has_mine(&self) -> bool {
        self.grid.mine_at(self.coords)
    }

    /// All existing cells at the 8 compass offsets around this one.
    pub fn neighbours(self) -> impl Iterator<Item = Cell<'a>> {
        neighbours_of(self.coords, self.grid.size())
            .map(move |coords| Cell::new(self.grid, coords))
    }

    /// The count of neighbouring cells holding a mine, in `0..=8`.
    pub fn degree(&self) -> u8 {
        self.neighbours()
            .filter(Cell::has_mine)
            .count()
            .try_into()
            .expect("a cell has at most 8 neighbours")
    }
}

/// Exclusive view of one cell, allowing state transitions.
#[derive(Debug)]
pub struct CellMut<'a> {
    grid: &'a mut Grid,
    coords: Coord2,
}

impl<'a> CellMut<'a> {
    pub(crate) fn new(grid: &'a mut Grid, coords: Coord2) -> Self {
        Self { grid, coords }
    }

    pub fn coords(&self) -> Coord2 {
        self.coords
    }

    pub fn state(&self) -> CellState {
        self.grid.state_at(self.coords)
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn has_flag(&self) -> bool {
        self.state().is_flagged()
    }

    pub fn has_mine(&self) -> bool {
        self.grid.mine_at(self.coords)
    }

    pub fn degree(&self) -> u8 {
        self.as_view().degree()
    }

    pub fn as_view(&self) -> Cell<'_> {
        Cell::new(self.grid, self.coords)
    }

    /// Flips the flag on a hidden cell. Open cells are left untouched.
    pub fn toggle_flag(&mut self) -> FlagOutcome {
        use CellState::*;

        match self.state() {
            Hidden => {
                self.grid.set_state(self.coords, Flagged);
                self.grid.flag_added();
                FlagOutcome::Flagged
            }
            Flagged => {
                self.grid.set_state(self.coords, Hidden);
                self.grid.flag_removed();
                FlagOutcome::Unflagged
            }
            Open => FlagOutcome::NoChange,
        }
    }

    /// Opens a hidden cell. Opening is idempotent and refuses flagged cells.
    pub fn open(&mut self) -> OpenOutcome {
        use CellState::*;

        match self.state() {
            Hidden => {
                self.grid.set_state(self.coords, Open);
                OpenOutcome::Opened
            }
            Open => OpenOutcome::AlreadyOpen,
            Flagged => OpenOutcome::Flagged,
        }
    }
}
