pub mod grid;
mod value_set;

pub use self::grid::{Coord, Grid};
pub use self::value_set::ValueSet;
