use crate::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Randomly brings cells to life between generations.
///
/// Every cell is hit with probability `1 / (width * height)`, so about one
/// spark lands per call regardless of the field size.
pub struct Sparker {
    rng: ChaCha8Rng,
}

impl Sparker {
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self { rng }
    }

    /// Sparks the field and returns the number of cells that were hit.
    pub fn spark(&mut self, grid: &mut Grid) -> usize {
        let (w, h) = (grid.width(), grid.height());
        let area = w * h;
        let mut hits = 0;
        for y in 0..h {
            for x in 0..w {
                if self.rng.gen_range(0..area) == 0 {
                    // coordinates come from the grid's own size
                    if grid.spawn(x as isize, y as isize).is_ok() {
                        hits += 1;
                    }
                }
            }
        }
        hits
    }
}
