use std::collections::{HashSet, VecDeque};

use prim_maze::{generate, BlockGrid, Cell, Coord, Generator, MazeError, RandPrims};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SIZES: &[(usize, usize)] = &[(4, 4), (5, 4), (4, 9), (10, 10), (17, 11), (33, 33)];

fn maze(width: usize, height: usize, seed: u64) -> BlockGrid {
    generate(width, height, ChaCha8Rng::seed_from_u64(seed)).unwrap()
}

fn passage_neighbors(grid: &BlockGrid, (x, y): Coord) -> Vec<Coord> {
    let mut out = Vec::new();
    let candidates = [
        (x.wrapping_sub(1), y),
        (x + 1, y),
        (x, y.wrapping_sub(1)),
        (x, y + 1),
    ];
    for (nx, ny) in candidates {
        if let Ok(cell) = grid.get(nx, ny) {
            if cell.is_passage() {
                out.push((nx, ny));
            }
        }
    }
    out
}

fn find(grid: &BlockGrid, pick: fn(&Cell) -> bool) -> Vec<Coord> {
    grid.all_cells()
        .filter(|(_, cell)| pick(cell))
        .map(|(coords, _)| coords)
        .collect()
}

fn is_entrance(cell: &Cell) -> bool {
    cell.flags().map_or(false, |f| f.is_entrance)
}

fn is_exit(cell: &Cell) -> bool {
    cell.flags().map_or(false, |f| f.is_exit)
}

fn reachable_from(grid: &BlockGrid, from: Coord) -> HashSet<Coord> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(from);
    queue.push_back(from);
    while let Some(current) = queue.pop_front() {
        for next in passage_neighbors(grid, current) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

#[test]
fn entrance_reaches_exit_and_every_passage() {
    for &(width, height) in SIZES {
        for seed in 0..20 {
            let grid = maze(width, height, seed);
            let entrance = find(&grid, is_entrance)[0];
            let exit = find(&grid, is_exit)[0];

            let reachable = reachable_from(&grid, entrance);
            assert!(reachable.contains(&exit), "{}x{} seed {}", width, height, seed);
            assert_eq!(reachable.len(), grid.count(Cell::is_passage));
        }
    }
}

#[test]
fn passages_form_a_tree() {
    for &(width, height) in SIZES {
        for seed in 0..20 {
            let grid = maze(width, height, seed);
            let passages = find(&grid, Cell::is_passage);

            // each edge is seen from both ends
            let degree_sum: usize = passages
                .iter()
                .map(|&coords| passage_neighbors(&grid, coords).len())
                .sum();
            assert_eq!(degree_sum / 2, passages.len() - 1, "{}x{} seed {}", width, height, seed);
        }
    }
}

#[test]
fn one_entrance_on_top_one_exit_on_bottom() {
    for &(width, height) in SIZES {
        for seed in 0..20 {
            let grid = maze(width, height, seed);

            let entrances = find(&grid, is_entrance);
            assert_eq!(entrances.len(), 1);
            assert_eq!(entrances[0].1, 0);

            let exits = find(&grid, is_exit);
            assert_eq!(exits.len(), 1);
            assert_eq!(exits[0].1, height - 1);
        }
    }
}

#[test]
fn nothing_left_unvisited() {
    for &(width, height) in SIZES {
        let grid = maze(width, height, 99);
        assert_eq!(grid.count(Cell::is_unvisited), 0);
        assert_eq!(
            grid.count(Cell::is_wall) + grid.count(Cell::is_passage),
            width * height
        );
    }
}

#[test]
fn perimeter_is_closed_apart_from_the_breaches() {
    for seed in 0..20 {
        let grid = maze(12, 8, seed);
        let open: Vec<Coord> = grid
            .all_cells()
            .filter(|(coords, cell)| grid.is_perimeter(*coords) && cell.is_passage())
            .map(|(coords, _)| coords)
            .collect();

        assert_eq!(open.len(), 2);
        assert!(open.iter().all(|&(x, y)| is_entrance(&grid.get(x, y).unwrap())
            || is_exit(&grid.get(x, y).unwrap())));
    }
}

#[test]
fn dead_ends_are_exactly_the_leaves() {
    for &(width, height) in SIZES {
        for seed in 0..20 {
            let grid = maze(width, height, seed);
            for (coords, cell) in grid.all_cells() {
                let flags = match cell {
                    Cell::Passage(flags) => flags,
                    _ => continue,
                };
                let degree = passage_neighbors(&grid, coords).len();
                let leaf = degree == 1 && !flags.is_entrance && !flags.is_exit;
                assert_eq!(flags.is_dead_end, leaf, "{:?} in {}x{} seed {}", coords, width, height, seed);
            }
        }
    }
}

#[test]
fn same_draws_same_maze() {
    for &(width, height) in SIZES {
        assert_eq!(maze(width, height, 1234), maze(width, height, 1234));
    }

    let different = (0..10).any(|seed| maze(15, 15, seed) != maze(15, 15, seed + 100));
    assert!(different);
}

#[test]
fn smallest_supported_maze() {
    for seed in 0..200 {
        let grid = maze(4, 4, seed);
        assert_eq!(find(&grid, is_entrance).len(), 1);
        assert_eq!(find(&grid, is_exit).len(), 1);

        let start = find(&grid, |cell| cell.flags().map_or(false, |f| f.is_start));
        assert_eq!(start.len(), 1);
        let (x, y) = start[0];
        assert!((1..=2).contains(&x) && (1..=2).contains(&y));

        // three of the four interior cells plus entrance and exit
        assert_eq!(grid.count(Cell::is_passage), 5);
    }
}

#[test]
fn ten_by_ten_passage_coverage() {
    for seed in 0..50 {
        let grid = maze(10, 10, seed);
        let passages = grid.count(Cell::is_passage);
        let walls = grid.count(Cell::is_wall);

        assert_eq!(passages + walls, 100);
        // every interior wall touches at least two passages, a passage touches at most four
        assert!(passages >= 64 / 3 + 2, "seed {} only {} passages", seed, passages);
        // the 8x8 interior plus entrance and exit
        assert!(passages <= 64 + 2);
        assert!(walls >= 36 - 2);
    }
}

#[test]
fn rejects_grids_without_an_interior() {
    let rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        generate(2, 10, rng),
        Err(MazeError::InvalidDimension {
            width: 2,
            height: 10
        })
    );
}

#[test]
fn generator_is_single_use() {
    let mut gen = RandPrims::new(6, 6, ChaCha8Rng::seed_from_u64(4)).unwrap();
    let grid = gen.generate_maze().unwrap();
    assert_eq!(grid.count(Cell::is_unvisited), 0);
    assert_eq!(gen.generate_maze(), Err(MazeError::AlreadyGenerated));
}
