pub mod api;
pub mod error;
pub mod logger;
pub mod placement;
pub mod puzzle;
pub mod solver;

pub use error::Error;
pub use puzzle::{Pos, Puzzle};
pub use solver::Solver;
