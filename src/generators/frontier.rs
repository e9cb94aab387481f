use rand::Rng;

use crate::grids::{Coord, Dimensions};

/// Walls waiting to be considered for carving.
///
/// Coordinates live in a dense vec and every grid slot remembers where its
/// coordinate sits in that vec, so insert, membership and removal are all O(1).
/// Removal swaps the last element into the hole. Nothing here depends on hash
/// ordering, the same sequence of draws always gives the same sequence of walls.
pub struct Frontier {
    walls: Vec<Coord>,
    slots: Vec<Option<usize>>,
    width: usize,
}

impl Frontier {
    pub fn new(dims: &Dimensions) -> Self {
        Self {
            walls: Vec::new(),
            slots: vec![None; dims.width * dims.height],
            width: dims.width,
        }
    }

    fn slot_of(&self, coords: Coord) -> usize {
        coords.1 * self.width + coords.0
    }

    /// false if the wall was already waiting
    pub fn insert(&mut self, coords: Coord) -> bool {
        let slot = self.slot_of(coords);
        if self.slots[slot].is_some() {
            return false;
        }

        self.slots[slot] = Some(self.walls.len());
        self.walls.push(coords);

        true
    }

    pub fn contains(&self, coords: Coord) -> bool {
        self.slots
            .get(self.slot_of(coords))
            .map_or(false, |slot| slot.is_some())
    }

    /// Uniform over everything currently waiting.
    pub fn remove_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        if self.walls.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..self.walls.len());
        let wall = self.walls.swap_remove(index);
        let slot = self.slot_of(wall);
        self.slots[slot] = None;

        if let Some(&moved) = self.walls.get(index) {
            let moved_slot = self.slot_of(moved);
            self.slots[moved_slot] = Some(index);
        }

        Some(wall)
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}
