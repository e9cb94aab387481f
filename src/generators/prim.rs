use log::{debug, trace};
use rand::Rng;

use crate::error::MazeError;
use crate::generators::frontier::Frontier;
use crate::generators::{annotate, GenerationState, Generator};
use crate::grids::block_grid::BlockGrid;
use crate::grids::{Cell, Coord, Neighbor, PassageFlags};

/// Randomized Prim's over walls. One instance builds exactly one maze.
pub struct RandPrims<R: Rng> {
    grid: Option<BlockGrid>,
    frontier: Frontier,
    rng: R,
    state: GenerationState,
    start: Option<Coord>,
}

impl<R: Rng> RandPrims<R> {
    /// Needs at least 3x3 so there is an interior cell to start from.
    pub fn new(width: usize, height: usize, rng: R) -> Result<Self, MazeError> {
        if width < 3 || height < 3 {
            return Err(MazeError::InvalidDimension { width, height });
        }

        let grid = BlockGrid::new(width, height)?;
        let frontier = Frontier::new(&grid.dims);
        Ok(Self {
            grid: Some(grid),
            frontier,
            rng,
            state: GenerationState::Uninitialized,
            start: None,
        })
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// None until the generator has been seeded
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// None once the finished grid has been handed out
    pub fn grid(&self) -> Option<&BlockGrid> {
        self.grid.as_ref()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    fn seed(&mut self) -> Result<(), MazeError> {
        let grid = self.grid.as_mut().ok_or(MazeError::AlreadyGenerated)?;

        // strictly inside the perimeter
        let x = self.rng.gen_range(1..=grid.max_x() - 1);
        let y = self.rng.gen_range(1..=grid.max_y() - 1);
        grid.set(x, y, Cell::Passage(PassageFlags::start()))?;
        self.start = Some((x, y));

        for ((nx, ny), _) in grid.neighbors4(x, y, false)? {
            grid.set(nx, ny, Cell::Wall)?;
            self.frontier.insert((nx, ny));
        }

        debug!(
            "seeded {}x{} maze at ({}, {}), {} walls waiting",
            grid.width(),
            grid.height(),
            x,
            y,
            self.frontier.len()
        );

        Ok(())
    }

    /// Draws one wall and carves it if that keeps the passages a tree.
    /// Returns whether the wall became a passage.
    fn carve_next(&mut self) -> Result<bool, MazeError> {
        let grid = self.grid.as_mut().ok_or(MazeError::AlreadyGenerated)?;
        let wall = match self.frontier.remove_random(&mut self.rng) {
            Some(wall) => wall,
            None => return Ok(false),
        };

        let neighbors: Vec<Neighbor> = grid.neighbors4(wall.0, wall.1, false)?.collect();
        let mut passages = Vec::new();
        for &((nx, ny), dir) in neighbors.iter() {
            if grid.get(nx, ny)?.is_passage() {
                passages.push(dir);
            }
        }

        // zero or several passages next door, carving would leave it dangling or close a loop
        if passages.len() != 1 {
            trace!("{:?} stays a wall, touches {} passages", wall, passages.len());
            return Ok(false);
        }

        // keep going straight through, away from the passage we came from
        let towards_passage = passages[0];
        if let Some(opposite) = (-towards_passage).step(wall, &grid.dims) {
            if !grid.is_perimeter(opposite) && grid.get(opposite.0, opposite.1)?.is_unvisited() {
                grid.set(opposite.0, opposite.1, Cell::Wall)?;
                self.frontier.insert(opposite);
            }
        }

        grid.set(wall.0, wall.1, Cell::passage())?;

        for &((nx, ny), _) in neighbors.iter() {
            if grid.get(nx, ny)?.is_unvisited() {
                grid.set(nx, ny, Cell::Wall)?;
                self.frontier.insert((nx, ny));
            }
        }

        trace!("carved {:?}, {} walls waiting", wall, self.frontier.len());

        Ok(true)
    }
}

impl<R: Rng> Generator for RandPrims<R> {
    fn step_generation(&mut self) -> Result<(), MazeError> {
        match self.state {
            GenerationState::Uninitialized => {
                self.seed()?;
                self.state = GenerationState::Seeded;
            }
            GenerationState::Seeded | GenerationState::Carving => {
                if self.frontier.is_empty() {
                    debug!("frontier exhausted, finalizing");
                    self.state = GenerationState::Finalizing;
                } else {
                    self.carve_next()?;
                    self.state = GenerationState::Carving;
                }
            }
            GenerationState::Finalizing => {
                let grid = self.grid.as_mut().ok_or(MazeError::AlreadyGenerated)?;
                annotate::finalize(grid)?;
                self.state = GenerationState::Done;
            }
            GenerationState::Done => return Err(MazeError::AlreadyGenerated),
        }

        Ok(())
    }

    fn next_step(&mut self) -> Result<&BlockGrid, MazeError> {
        self.step_generation()?;
        self.grid.as_ref().ok_or(MazeError::AlreadyGenerated)
    }

    fn generate_maze(&mut self) -> Result<BlockGrid, MazeError> {
        if self.grid.is_none() {
            return Err(MazeError::AlreadyGenerated);
        }

        while !self.is_done() {
            self.step_generation()?;
        }

        self.grid.take().ok_or(MazeError::AlreadyGenerated)
    }

    fn is_done(&self) -> bool {
        self.state == GenerationState::Done
    }
}
