use std::collections::BTreeSet;

use rand::Rng;

use crate::error::{GenerationError, Result};
use crate::geometry::{Coordinate, GridSize};

/// Rejection sampler drawing distinct coordinates from a grid.
///
/// Each draw picks a row and a column uniformly; a draw is accepted only if
/// it is new and not in the excluded set. Capacity is checked before the
/// loop starts so an infeasible request fails instead of spinning forever.
pub struct CoordinateSampler<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
    size: GridSize,
    draws: u64,
    rejections: u64,
}

impl<'r, R: Rng + ?Sized> CoordinateSampler<'r, R> {
    pub fn new(rng: &'r mut R, size: GridSize) -> Result<Self> {
        size.validate()?;
        Ok(Self {
            rng,
            size,
            draws: 0,
            rejections: 0,
        })
    }

    /// Draw `count` distinct coordinates avoiding `excluded`.
    pub fn draw(&mut self, count: u32, excluded: &BTreeSet<Coordinate>) -> Result<BTreeSet<Coordinate>> {
        let blocked = excluded.iter().filter(|c| self.size.contains(**c)).count() as u64;
        let free = self.size.capacity() - blocked;
        if u64::from(count) > free {
            return Err(GenerationError::ConstraintViolation(format!(
                "cannot place {count} items in a {}x{} grid with {free} free cells",
                self.size.rows, self.size.columns
            )));
        }

        let mut drawn = BTreeSet::new();
        while drawn.len() < count as usize {
            let candidate = self.random_coordinate();
            self.draws += 1;
            if excluded.contains(&candidate) || !drawn.insert(candidate) {
                self.rejections += 1;
            }
        }
        Ok(drawn)
    }

    fn random_coordinate(&mut self) -> Coordinate {
        Coordinate::new(
            self.rng.gen_range(0..self.size.rows),
            self.rng.gen_range(0..self.size.columns),
        )
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn rejections(&self) -> u64 {
        self.rejections
    }
}
