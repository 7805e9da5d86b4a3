mod pattern;

use crate::{rule, GridError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Requested dimensions of a [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl GridConfig {
    pub const DEFAULT_WIDTH: usize = 64;
    pub const DEFAULT_HEIGHT: usize = 36;

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// Logical dimensions of a grid, without the sentinel border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

/// Game of Life field with edges stitched together.
///
/// Cells are stored row-major in a `(height + 2) x (width + 2)` buffer.
/// The outer ring is a copy of the opposite interior edge, so every interior
/// cell has all 8 neighbors at fixed offsets and the field behaves like a torus.
/// Logical `(x, y)` lives at storage row `y + 1`, column `x + 1`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Probability of a cell being alive after random seeding.
    pub const FILL_RATE: f64 = 0.5;

    fn allocate(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width + 2) * (height + 2)],
        }
    }

    /// Create a field with all cells dead.
    pub fn blank(config: GridConfig) -> Result<Self, GridError> {
        let GridConfig { width, height } = config;
        if width < 1 || height < 1 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self::allocate(width, height))
    }

    /// Create a field seeded from entropy.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        Self::random(config, None)
    }

    /// Create a field with random cells
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(config: GridConfig, seed: Option<u64>) -> Result<Self, GridError> {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::with_rng(config, &mut rng)
    }

    /// Create a field whose cells are drawn from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(config: GridConfig, rng: &mut R) -> Result<Self, GridError> {
        let mut grid = Self::blank(config)?;
        grid.fill_random(rng);
        log::debug!(
            "seeded {}x{} grid, population {}",
            grid.width,
            grid.height,
            grid.population()
        );
        Ok(grid)
    }

    /// Re-seed every cell in place, keeping the dimensions.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fill_random(rng);
    }

    fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // border cells get drawn as well; the sync below overwrites them
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(Self::FILL_RATE);
        }
        self.sync_sentinels();
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn stride(&self) -> usize {
        self.width + 2
    }

    /// Storage index of the logical cell `(x, y)`.
    fn index(&self, x: isize, y: isize) -> Result<usize, GridError> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(ux), Ok(uy)) if ux < self.width && uy < self.height => {
                Ok((uy + 1) * self.stride() + ux + 1)
            }
            _ => Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    pub fn get_cell(&self, x: isize, y: isize) -> Result<bool, GridError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Set the state of one cell and refresh the whole border.
    pub fn set_cell(&mut self, x: isize, y: isize, alive: bool) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = alive;
        // an edge write can touch a row mirror and a column mirror at once
        self.sync_sentinels();
        Ok(())
    }

    /// Make the cell alive.
    pub fn spawn(&mut self, x: isize, y: isize) -> Result<(), GridError> {
        self.set_cell(x, y, true)
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Interior rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let width = self.width;
        self.cells
            .chunks_exact(self.stride())
            .skip(1)
            .take(self.height)
            .map(move |row| &row[1..=width])
    }

    /// Interior cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows().flatten().copied()
    }

    pub fn population(&self) -> usize {
        self.cells().filter(|&alive| alive).count()
    }

    /// Copy the opposite interior edge into the border ring.
    ///
    /// Columns are wrapped first on every row (border rows included), then
    /// whole rows are copied, so each corner ends up equal to the diagonally
    /// opposite interior cell.
    fn sync_sentinels(&mut self) {
        let (w, h, stride) = (self.width, self.height, self.stride());

        for row in self.cells.chunks_exact_mut(stride) {
            row[0] = row[w];
            row[w + 1] = row[1];
        }

        self.cells.copy_within(h * stride..(h + 1) * stride, 0);
        self.cells.copy_within(stride..2 * stride, (h + 1) * stride);
    }

    fn count_neibs(&self, idx: usize) -> u8 {
        let s = self.stride();
        [
            idx - s - 1,
            idx - s,
            idx - s + 1,
            idx - 1,
            idx + 1,
            idx + s - 1,
            idx + s,
            idx + s + 1,
        ]
        .into_iter()
        .map(|i| self.cells[i] as u8)
        .sum()
    }

    /// Advance the field by one generation.
    pub fn next(&mut self) {
        let stride = self.stride();
        let mut cells_next = vec![false; self.cells.len()];
        for y in 1..=self.height {
            for x in 1..=self.width {
                let idx = x + y * stride;
                let neibs = self.count_neibs(idx);
                cells_next[idx] = rule::next_state(self.cells[idx], neibs);
            }
        }
        self.cells = cells_next;
        self.sync_sentinels();
    }
}

impl Default for Grid {
    /// Random 64x36 field seeded from entropy.
    fn default() -> Self {
        let config = GridConfig::default();
        let mut grid = Self::allocate(config.width, config.height);
        grid.fill_random(&mut ChaCha8Rng::from_entropy());
        grid
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("population", &self.population())
            .finish()
    }
}

/// One line per row: `NN | # . . #`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            write!(f, "{:02} |", y)?;
            for &alive in row {
                write!(f, " {}", if alive { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
