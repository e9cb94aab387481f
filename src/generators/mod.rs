pub mod annotate;
pub mod frontier;
pub mod prim;

use rand::Rng;

use crate::error::MazeError;
use crate::grids::block_grid::BlockGrid;
use prim::RandPrims;

pub trait Generator {
    /// Advances by one state transition or one frontier draw.
    fn step_generation(&mut self) -> Result<(), MazeError>;
    fn next_step(&mut self) -> Result<&BlockGrid, MazeError>;
    /// Runs to completion and hands over the grid. Only ever succeeds once.
    fn generate_maze(&mut self) -> Result<BlockGrid, MazeError>;
    fn is_done(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Uninitialized,
    Seeded,
    Carving,
    Finalizing,
    Done,
}

/// Carves a perfect `width` x `height` maze.
///
/// Only the structural minimum is checked here (an interior cell to start from),
/// callers should keep both sides at [`MIN_DIM`](crate::grids::MIN_DIM) or above
/// to get something that looks like a maze.
pub fn generate<R: Rng>(width: usize, height: usize, rng: R) -> Result<BlockGrid, MazeError> {
    RandPrims::new(width, height, rng)?.generate_maze()
}
