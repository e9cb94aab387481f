//! Perfect maze generation with a randomized, wall based take on Prim's algorithm.
//!
//! [`generate`] carves the maze, opens an entrance on the top row and an exit on
//! the bottom row, then flags dead ends. Rendering is left to the caller,
//! [`renderer`] has the small helpers the bundled binary uses.

pub mod error;
pub mod generators;
pub mod grids;
pub mod renderer;

pub use error::MazeError;
pub use generators::prim::RandPrims;
pub use generators::{generate, GenerationState, Generator};
pub use grids::block_grid::BlockGrid;
pub use grids::{Cell, Coord, PassageFlags};
