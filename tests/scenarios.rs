use sparklife::{Grid, GridConfig, GridError, Size};

const SEED: u64 = 42;

fn snapshot(grid: &Grid) -> Vec<Vec<bool>> {
    grid.rows().map(|row| row.to_vec()).collect()
}

/// Next generation computed with explicit modulo wraparound.
fn reference_next(cells: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let (h, w) = (cells.len() as isize, cells[0].len() as isize);
    let mut result = vec![vec![false; w as usize]; h as usize];
    for y in 0..h {
        for x in 0..w {
            let mut neibs = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (nx, ny) = ((x + dx).rem_euclid(w), (y + dy).rem_euclid(h));
                    neibs += cells[ny as usize][nx as usize] as u32;
                }
            }
            let alive = cells[y as usize][x as usize];
            result[y as usize][x as usize] = neibs == 3 || (alive && neibs == 2);
        }
    }
    result
}

#[test]
fn test_size_is_echoed() {
    for (w, h) in [(1, 1), (3, 7), (64, 36), (200, 1)] {
        let grid = Grid::random(GridConfig::new(w, h), Some(SEED)).unwrap();
        assert_eq!(
            grid.size(),
            Size {
                width: w,
                height: h
            }
        );
    }
}

#[test]
fn test_zero_dimension_fails() {
    assert!(matches!(
        Grid::new(GridConfig::new(0, 36)),
        Err(GridError::InvalidDimension { .. })
    ));
    assert!(matches!(
        Grid::new(GridConfig::new(64, 0)),
        Err(GridError::InvalidDimension { .. })
    ));
}

#[test]
fn test_set_and_get_every_cell() {
    let mut grid = Grid::random(GridConfig::new(7, 5), Some(SEED)).unwrap();
    for y in 0..5 {
        for x in 0..7 {
            grid.set_cell(x, y, true).unwrap();
            assert_eq!(grid.get_cell(x, y), Ok(true));
            grid.set_cell(x, y, false).unwrap();
            assert_eq!(grid.get_cell(x, y), Ok(false));
            grid.spawn(x, y).unwrap();
            assert_eq!(grid.get_cell(x, y), Ok(true));
        }
    }
    assert_eq!(grid.population(), 35);
}

#[test]
fn test_accessors_reject_out_of_range() {
    let mut grid = Grid::random(GridConfig::default(), Some(SEED)).unwrap();
    let Size { width, height } = grid.size();
    let (w, h) = (width as isize, height as isize);
    for (x, y) in [(-1, 0), (w, 0), (0, -1), (0, h), (w, h), (-1, -1)] {
        assert!(matches!(
            grid.get_cell(x, y),
            Err(GridError::OutOfRange { .. })
        ));
        assert!(matches!(
            grid.set_cell(x, y, true),
            Err(GridError::OutOfRange { .. })
        ));
    }
}

#[test]
fn test_corner_wraps_to_opposite_corner() {
    // a glider sitting across all four corners of the torus
    let mut grid = Grid::from_rows(&[
        "#......#", //
        "........",
        "........",
        "........",
        "......#.",
        "#.....##",
    ])
    .unwrap();
    let mut expected = snapshot(&grid);
    for _ in 0..12 {
        grid.next();
        expected = reference_next(&expected);
        assert_eq!(snapshot(&grid), expected);
    }
}

#[test]
fn test_single_cell_counts_as_diagonal_neighbor() {
    let (w, h) = (6, 5);
    let mut grid = Grid::blank(GridConfig::new(w, h)).unwrap();
    grid.spawn(0, 0).unwrap();
    grid.spawn(w as isize - 2, h as isize - 1).unwrap();
    grid.spawn(w as isize - 1, h as isize - 2).unwrap();
    // (w-1, h-1) has exactly three live neighbors, one of them across the corner
    grid.next();
    assert_eq!(grid.get_cell(w as isize - 1, h as isize - 1), Ok(true));
}

#[test]
fn test_block_is_still_life() {
    let mut grid = Grid::from_rows(&[
        "......", //
        "......",
        "..##..",
        "..##..",
        "......",
        "......",
    ])
    .unwrap();
    let before = grid.clone();
    for _ in 0..5 {
        grid.next();
        assert_eq!(grid, before);
    }
}

#[test]
fn test_blinker_oscillates() {
    let horizontal = Grid::from_rows(&[
        ".....", //
        ".....",
        ".###.",
        ".....",
        ".....",
    ])
    .unwrap();
    let vertical = Grid::from_rows(&[
        ".....", //
        "..#..",
        "..#..",
        "..#..",
        ".....",
    ])
    .unwrap();

    let mut grid = horizontal.clone();
    grid.next();
    assert_eq!(grid, vertical);
    grid.next();
    assert_eq!(grid, horizontal);
}

#[test]
fn test_blinker_across_the_seam() {
    // the horizontal line wraps from the right edge to the left one
    let mut grid = Grid::from_rows(&["##...#", "......", "......", "......"]).unwrap();
    grid.next();
    let expected = Grid::from_rows(&["#.....", "#.....", "......", "#....."]).unwrap();
    assert_eq!(grid, expected);
    grid.next();
    assert_eq!(
        grid,
        Grid::from_rows(&["##...#", "......", "......", "......"]).unwrap()
    );
}

#[test]
fn test_glider_travels_around_torus() {
    let start = Grid::from_rows(&[
        ".#......", //
        "..#.....",
        "###.....",
        "........",
        "........",
        "........",
        "........",
        "........",
    ])
    .unwrap();
    let mut grid = start.clone();
    // 4 generations per diagonal step, 8 steps to come back
    for generation in 1..=32 {
        grid.next();
        assert_eq!(grid.population(), 5, "generation {}", generation);
    }
    assert_eq!(grid, start);
}

#[test]
fn test_next_is_deterministic() {
    let saved = Grid::random(GridConfig::new(40, 30), Some(SEED)).unwrap();
    let mut a = saved.clone();
    let mut b = saved.clone();
    for _ in 0..20 {
        a.next();
        b.next();
        assert_eq!(a, b);
    }
    let mut c = saved.clone();
    c.next();
    let mut d = saved;
    d.next();
    assert_eq!(c, d);
}

#[test]
fn test_random_field_matches_reference() {
    let mut grid = Grid::random(GridConfig::new(64, 36), Some(SEED)).unwrap();
    let mut expected = snapshot(&grid);
    for _ in 0..50 {
        grid.next();
        expected = reference_next(&expected);
    }
    assert_eq!(snapshot(&grid), expected);
}
