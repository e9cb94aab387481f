pub mod block_grid;

pub const DEFAULT_DIMS: (usize, usize) = (10, 10);

/// smallest width/height a caller should ask for, smaller grids have no room for a maze
pub const MIN_DIM: usize = 4;
pub const DEFAULT_MAX_DIM: usize = 33;

/// (x, y), x is the column and y the row
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn max_x(&self) -> usize {
        self.width - 1
    }

    pub fn max_y(&self) -> usize {
        self.height - 1
    }

    pub fn contains(&self, coords: Coord) -> bool {
        coords.0 < self.width && coords.1 < self.height
    }

    pub fn is_perimeter(&self, coords: Coord) -> bool {
        coords.0 == 0 || coords.1 == 0 || coords.0 == self.max_x() || coords.1 == self.max_y()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    West = 0,
    East = 1,
    North = 2,
    South = 3,

    Sentinel = 255,
}

impl Direction {
    /// the coordinate one step from `coords`, None when it would leave the grid
    pub fn step(self, coords: Coord, dims: &Dimensions) -> Option<Coord> {
        let (x, y) = coords;
        let next = match self {
            Direction::West => (x.checked_sub(1)?, y),
            Direction::East => (x + 1, y),
            Direction::North => (x, y.checked_sub(1)?),
            Direction::South => (x, y + 1),
            Direction::Sentinel => return None,
        };

        if dims.contains(next) {
            Some(next)
        } else {
            None
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Sentinel => Direction::Sentinel,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::West,
            1 => Direction::East,
            2 => Direction::North,
            3 => Direction::South,
            _ => unreachable!(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PassageFlags {
    pub is_start: bool,
    pub is_entrance: bool,
    pub is_exit: bool,
    pub is_dead_end: bool,
}

impl PassageFlags {
    pub fn start() -> Self {
        Self {
            is_start: true,
            ..Self::default()
        }
    }

    pub fn entrance() -> Self {
        Self {
            is_entrance: true,
            ..Self::default()
        }
    }

    pub fn exit() -> Self {
        Self {
            is_exit: true,
            ..Self::default()
        }
    }
}

/// A cell only ever moves forward: Unvisited -> Wall -> Passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Unvisited,
    Wall,
    Passage(PassageFlags),
}

impl Cell {
    pub fn passage() -> Self {
        Cell::Passage(PassageFlags::default())
    }

    pub fn is_passage(&self) -> bool {
        matches!(self, Cell::Passage(_))
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }

    pub fn is_unvisited(&self) -> bool {
        matches!(self, Cell::Unvisited)
    }

    pub fn flags(&self) -> Option<&PassageFlags> {
        match self {
            Cell::Passage(flags) => Some(flags),
            _ => None,
        }
    }
}

pub type Neighbor = (Coord, Direction);

/// Up to four neighbours of a cell, yielded west, east, north, south.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub west: Option<Coord>,
    pub east: Option<Coord>,
    pub north: Option<Coord>,
    pub south: Option<Coord>,

    counter: Direction,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            west: None,
            east: None,
            north: None,
            south: None,
            counter: Direction::West,
        }
    }

    pub fn get(&self, direction: Direction) -> Option<Coord> {
        match direction {
            Direction::West => self.west,
            Direction::East => self.east,
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::Sentinel => None,
        }
    }

    pub(crate) fn set(&mut self, direction: Direction, coords: Option<Coord>) {
        match direction {
            Direction::West => self.west = coords,
            Direction::East => self.east = coords,
            Direction::North => self.north = coords,
            Direction::South => self.south = coords,
            Direction::Sentinel => {}
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Neighborhood {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.counter {
                Direction::West => {
                    self.counter = Direction::East;
                    if let Some(west) = self.west {
                        return Some((west, Direction::West));
                    }
                }
                Direction::East => {
                    self.counter = Direction::North;
                    if let Some(east) = self.east {
                        return Some((east, Direction::East));
                    }
                }
                Direction::North => {
                    self.counter = Direction::South;
                    if let Some(north) = self.north {
                        return Some((north, Direction::North));
                    }
                }
                Direction::South => {
                    self.counter = Direction::Sentinel;
                    if let Some(south) = self.south {
                        return Some((south, Direction::South));
                    }
                }
                Direction::Sentinel => {
                    return None;
                }
            }
        }
    }
}
