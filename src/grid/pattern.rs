use super::Grid;
use crate::GridError;

impl Grid {
    /// Build a field from ASCII rows, `#`/`O`/`o` for alive and `.`/`_` for dead.
    ///
    /// Width is the length of the rows, height is their number.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        let mut grid = Self::allocate(width, height);
        let stride = grid.stride();
        for (y, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                grid.cells[(y + 1) * stride + x + 1] = match symbol {
                    '#' | 'O' | 'o' => true,
                    '.' | '_' => false,
                    _ => {
                        return Err(GridError::UnexpectedSymbol {
                            symbol,
                            row: y,
                            column: x,
                        })
                    }
                };
            }
        }
        grid.sync_sentinels();
        Ok(grid)
    }
}
