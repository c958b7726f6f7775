
pub mod a_star;
mod shortest_path;

pub use a_star::{AStar, Route, SearchStats};

use shortest_path::shortest_path;
