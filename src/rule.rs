//! Conway's B3/S23 rule.

/// State of a cell in the next generation.
///
/// A cell with exactly 3 live neighbors is born (or survives), a cell with
/// exactly 2 keeps its state, any other count kills it.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match neighbors {
        3 => true,
        2 => alive,
        _ => false,
    }
}
