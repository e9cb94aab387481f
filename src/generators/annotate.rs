use log::debug;

use crate::error::MazeError;
use crate::grids::block_grid::BlockGrid;
use crate::grids::{Cell, Coord, PassageFlags};

/// Everything that happens once the frontier is empty.
pub fn finalize(grid: &mut BlockGrid) -> Result<(), MazeError> {
    let filled = grid.fill_unvisited(Cell::Wall);
    debug!("walled off {} unreachable cells", filled);

    let entrance = place_entrance(grid)?;
    let exit = place_exit(grid)?;
    debug!("entrance at {:?}, exit at {:?}", entrance, exit);

    let dead_ends = mark_dead_ends(grid)?;
    debug!("marked {} dead ends", dead_ends);

    Ok(())
}

/// First passage on row 1, scanning left to right, opens up the cell above it.
pub fn place_entrance(grid: &mut BlockGrid) -> Result<Coord, MazeError> {
    let x = first_passage_in_row(grid, 0, 1)?.ok_or(MazeError::NoEntranceCandidate)?;
    grid.set(x, 0, Cell::Passage(PassageFlags::entrance()))?;

    Ok((x, 0))
}

/// First passage on the second to last row, from column 1 on, opens up the cell below it.
pub fn place_exit(grid: &mut BlockGrid) -> Result<Coord, MazeError> {
    let max_y = grid.max_y();
    let x = first_passage_in_row(grid, 1, max_y - 1)?.ok_or(MazeError::NoExitCandidate)?;
    grid.set(x, max_y, Cell::Passage(PassageFlags::exit()))?;

    Ok((x, max_y))
}

fn first_passage_in_row(
    grid: &BlockGrid,
    from_x: usize,
    y: usize,
) -> Result<Option<usize>, MazeError> {
    for x in from_x..grid.width() {
        if grid.get(x, y)?.is_passage() {
            return Ok(Some(x));
        }
    }

    Ok(None)
}

/// Flags every passage with a single passage neighbour, entrance and exit aside.
///
/// Neighbours on the perimeter count here, so the cell just inside the entrance
/// sees the entrance and is not a dead end because of it.
pub fn mark_dead_ends(grid: &mut BlockGrid) -> Result<usize, MazeError> {
    let candidates: Vec<(Coord, PassageFlags)> = grid
        .all_cells()
        .filter_map(|(coords, cell)| match cell {
            Cell::Passage(flags) if !flags.is_entrance && !flags.is_exit => {
                Some((coords, *flags))
            }
            _ => None,
        })
        .collect();

    let mut marked = 0;
    for ((x, y), flags) in candidates {
        let mut passages = 0;
        for ((nx, ny), _) in grid.neighbors4(x, y, true)? {
            if grid.get(nx, ny)?.is_passage() {
                passages += 1;
            }
        }

        if passages == 1 {
            grid.set(
                x,
                y,
                Cell::Passage(PassageFlags {
                    is_dead_end: true,
                    ..flags
                }),
            )?;
            marked += 1;
        }
    }

    Ok(marked)
}
