use std::fmt;

use crate::grids::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// width or height below the structural minimum
    InvalidDimension { width: usize, height: usize },
    /// coordinate access outside the grid, always a generator defect
    OutOfBounds(Coord),
    NoEntranceCandidate,
    NoExitCandidate,
    /// the generator already handed out its grid
    AlreadyGenerated,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { width, height } => {
                write!(f, "invalid maze dimensions {}x{}", width, height)
            }
            MazeError::OutOfBounds((x, y)) => {
                write!(f, "coordinate ({}, {}) is outside the grid", x, y)
            }
            MazeError::NoEntranceCandidate => write!(f, "no passage on row 1 to open an entrance"),
            MazeError::NoExitCandidate => {
                write!(f, "no passage on the second to last row to open an exit")
            }
            MazeError::AlreadyGenerated => write!(f, "generator has already produced its maze"),
        }
    }
}

impl std::error::Error for MazeError {}
