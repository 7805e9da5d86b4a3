use crate::{Grid, Size};
use eframe::egui::{Color32, ColorImage};

/// Color of the cell `(x, y)`.
///
/// Both states follow the same diagonal gradient (red grows downwards, green
/// grows rightwards, blue fades towards the bottom right corner); dead cells
/// are capped at 32, live ones use the full range.
pub fn cell_color(x: usize, y: usize, size: Size, alive: bool) -> Color32 {
    let fx = x as f32 / size.width as f32;
    let fy = y as f32 / size.height as f32;
    let (r, g, b) = if alive {
        (255. * fy / 2., 255. * fx / 2., 255. - 255. * (fy + fx) / 2.)
    } else {
        (32. * fy, 32. * fx, 32. - 32. * (fy + fx) / 2.)
    };
    Color32::from_rgb(r as u8, g as u8, b as u8)
}

/// Transforms the field into image data, one pixel per cell.
pub fn render(grid: &Grid) -> ColorImage {
    let size = grid.size();
    let pixels = grid
        .rows()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &alive)| cell_color(x, y, size, alive))
        })
        .collect();
    ColorImage {
        size: [size.width, size.height],
        pixels,
    }
}
