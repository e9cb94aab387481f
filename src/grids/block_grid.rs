use crate::error::MazeError;
use crate::grids::{Cell, Coord, Dimensions, Direction, Neighborhood};

/// Width x height cells stored row major in one contiguous vec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    pub dims: Dimensions,

    cells: Vec<Cell>,
}

impl BlockGrid {
    /// Every cell starts out `Unvisited`. Anything under 2x2 has no sensible perimeter.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width < 2 || height < 2 {
            return Err(MazeError::InvalidDimension { width, height });
        }

        Ok(Self {
            cells: vec![Cell::Unvisited; width * height],
            dims: Dimensions { width, height },
        })
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn max_x(&self) -> usize {
        self.dims.max_x()
    }

    pub fn max_y(&self) -> usize {
        self.dims.max_y()
    }

    pub fn is_perimeter(&self, coords: Coord) -> bool {
        self.dims.is_perimeter(coords)
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, MazeError> {
        if self.dims.contains((x, y)) {
            Ok(y * self.dims.width + x)
        } else {
            Err(MazeError::OutOfBounds((x, y)))
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, MazeError> {
        let index = self.index_of(x, y)?;

        Ok(self.cells[index])
    }

    /// returns the cell that was replaced
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<Cell, MazeError> {
        let index = self.index_of(x, y)?;
        let prev = self.cells[index];
        self.cells[index] = cell;

        Ok(prev)
    }

    /// Left, right, up and down neighbours of (x, y). Without `include_edge` any
    /// neighbour on the outer ring is left out.
    pub fn neighbors4(
        &self,
        x: usize,
        y: usize,
        include_edge: bool,
    ) -> Result<Neighborhood, MazeError> {
        self.index_of(x, y)?;

        let mut neighbors = Neighborhood::new();
        for dir in (0..4usize).map(Direction::from) {
            let coords = dir
                .step((x, y), &self.dims)
                .filter(|&coords| include_edge || !self.dims.is_perimeter(coords));
            neighbors.set(dir, coords);
        }

        Ok(neighbors)
    }

    /// Every cell with its coordinate, row by row.
    pub fn all_cells(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        let width = self.dims.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| ((index % width, index / width), cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.dims.width)
    }

    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Cell) -> bool,
    {
        self.cells.iter().filter(|&cell| predicate(cell)).count()
    }

    /// Turns every cell still `Unvisited` into `kind`, returns how many changed.
    pub fn fill_unvisited(&mut self, kind: Cell) -> usize {
        let mut filled = 0;
        for cell in self.cells.iter_mut().filter(|cell| cell.is_unvisited()) {
            *cell = kind;
            filled += 1;
        }

        filled
    }
}
