//! Conway's Game of Life on a torus, kept wrapped by a sentinel border.

mod error;
mod grid;
mod gui;
pub mod rule;
mod spark;
mod utils;

pub use error::GridError;
pub use grid::{Grid, GridConfig, Size};
pub use gui::{App, Config};
pub use spark::Sparker;
pub use utils::{Settings, TickTimer};
