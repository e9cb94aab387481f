use std::fmt;

use crate::grids::block_grid::BlockGrid;
use crate::grids::Cell;

/// Class a page would style the cell with. Entrance and exit win over
/// everything else, then the start point, then dead ends.
pub fn class_name(cell: &Cell) -> &'static str {
    match cell {
        Cell::Unvisited => "unvisited",
        Cell::Wall => "wall",
        Cell::Passage(flags) => {
            if flags.is_entrance {
                "entrance"
            } else if flags.is_exit {
                "exit"
            } else if flags.is_start {
                "start-point"
            } else if flags.is_dead_end {
                "dead-end"
            } else {
                "cell"
            }
        }
    }
}

pub fn to_char(cell: &Cell) -> char {
    match class_name(cell) {
        "wall" => '#',
        "entrance" => 'E',
        "exit" => 'X',
        "start-point" => 'S',
        "dead-end" => '.',
        "cell" => ' ',
        _ => '?',
    }
}

/// One line of class names per row, separated by spaces.
pub fn class_rows(grid: &BlockGrid) -> Vec<String> {
    grid.rows()
        .map(|row| row.iter().map(class_name).collect::<Vec<_>>().join(" "))
        .collect()
}

impl fmt::Display for BlockGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", to_char(cell))?;
            }
        }
        Ok(())
    }
}
