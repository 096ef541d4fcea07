//! Output document trees consumed by the game runtime
//!
//! - `boardPositions`: adjacency listing per non-isolated vertex
//! - `distances`: hop counts for each unordered pair within the cutoff
//!
//! Trees are built in memory first and serialized by [`xml`].

pub mod xml;

use crate::board::{Transportation, VertexId};
use crate::graph::{DistanceTable, Graph};

/// One move available from a board position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub destination: VertexId,
    pub transportation: Transportation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPosition {
    pub id: VertexId,
    pub actions: Vec<Action>,
}

/// Root `<boardPositions>` document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardPositions {
    pub positions: Vec<BoardPosition>,
}

impl BoardPositions {
    pub fn action_count(&self) -> usize {
        self.positions.iter().map(|p| p.actions.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToEntry {
    pub id: VertexId,
    pub distance: u32,
}

/// A source with at least one qualifying target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromEntry {
    pub id: VertexId,
    pub targets: Vec<ToEntry>,
}

/// Root `<distances>` document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distances {
    pub sources: Vec<FromEntry>,
}

impl Distances {
    pub fn entry_count(&self) -> usize {
        self.sources.iter().map(|f| f.targets.len()).sum()
    }

    /// Distance recorded for `s < t`, if the pair was emitted.
    pub fn lookup(&self, s: VertexId, t: VertexId) -> Option<u32> {
        self.sources
            .iter()
            .find(|f| f.id == s)?
            .targets
            .iter()
            .find(|to| to.id == t)
            .map(|to| to.distance)
    }
}

/// Adjacency listing for every vertex that has at least one incident edge.
pub fn board_document(graph: &Graph) -> BoardPositions {
    let positions = graph
        .vertices()
        .filter(|&v| !graph.is_isolated(v))
        .map(|v| BoardPosition {
            id: v,
            actions: graph
                .incident(v)
                .map(|(destination, edge)| Action {
                    destination,
                    transportation: edge.transportation,
                })
                .collect(),
        })
        .collect();

    BoardPositions { positions }
}

/// Distance entries for pairs `s < t` with `s` non-isolated and a hop count
/// of at most `cutoff`.
///
/// The table is symmetric, so each unordered pair is written once. A `from`
/// element exists only when it has at least one `to` child.
pub fn distance_document(graph: &Graph, table: &DistanceTable, cutoff: u32) -> Distances {
    let mut sources = Vec::new();

    for s in graph.vertices().filter(|&v| !graph.is_isolated(v)) {
        let targets: Vec<ToEntry> = (s + 1..graph.vertex_count())
            .filter_map(|t| match table.get(s, t) {
                Some(distance) if distance <= cutoff => Some(ToEntry { id: t, distance }),
                _ => None,
            })
            .collect();

        if !targets.is_empty() {
            sources.push(FromEntry { id: s, targets });
        }
    }

    Distances { sources }
}
