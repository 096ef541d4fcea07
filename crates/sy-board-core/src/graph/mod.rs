//! Board graph and shortest-distance computation
//!
//! - Undirected graph built once from a [`BoardSpec`](crate::board::BoardSpec)
//! - BFS all-pairs hop counts under an explicit edge predicate

pub mod bfs;
pub mod types;

pub use bfs::{shortest_distances, DistanceTable, Faction, Visibility};
pub use types::{Edge, Graph};
