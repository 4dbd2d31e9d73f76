pub mod errors;
pub mod graph;
pub mod io;
pub mod log;
pub mod route_inspection;
pub mod shortest_path;
pub mod solver;
pub mod spanning_tree;
pub mod tsp;
pub mod utils;

pub mod prelude {
    pub use super::errors::*;
    pub use super::graph::*;
    pub use super::io::*;
    pub use super::route_inspection::{ClosedWalk, route_inspection};
    pub use super::shortest_path::{Path, ShortestPathTree, shortest_path};
    pub use super::solver::solve;
    pub use super::spanning_tree::{Extremum, SpanningForest, spanning_forest};
    pub use super::tsp::{Tour, held_karp};
}

#[cfg(test)]
mod testing;
