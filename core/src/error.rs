use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid width {0} is below the minimum")]
    WidthBelowMinimum(Coord),
    #[error("grid height {0} is below the minimum")]
    HeightBelowMinimum(Coord),
    #[error("mine load factor is not a finite number")]
    LoadFactorNotFinite,
    #[error("invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GridError>;
