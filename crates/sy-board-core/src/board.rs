//! Board description: vertex count plus the literal edge list
//!
//! The board is passed around as an explicit value so the graph builder
//! never reaches for module-level data.

use crate::bail_out_of_range;
use crate::error::Result;

/// Index of a board position, in `[0, vertex_count)`.
pub type VertexId = usize;

/// Transportation mode carried by an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transportation {
    Taxi,
    Bus,
    Underground,
    /// Only reachable by hiders on the standard board
    Boat,
}

impl Transportation {
    /// Label written into `<transportation>` elements
    pub fn as_str(&self) -> &'static str {
        match self {
            Transportation::Taxi => "taxi",
            Transportation::Bus => "bus",
            Transportation::Underground => "underground",
            Transportation::Boat => "boat",
        }
    }
}

/// One undirected connection in the literal edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: VertexId,
    pub to: VertexId,
    pub transportation: Transportation,
    /// Public edges are usable by seekers; private ones by hiders only
    pub public: bool,
}

impl EdgeSpec {
    pub fn new(from: VertexId, to: VertexId, transportation: Transportation, public: bool) -> Self {
        Self {
            from,
            to,
            transportation,
            public,
        }
    }
}

/// Input to the graph builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSpec {
    pub vertex_count: usize,
    pub edges: Vec<EdgeSpec>,
}

impl BoardSpec {
    pub fn new(vertex_count: usize, edges: Vec<EdgeSpec>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    /// The compiled-in board shipped with the game runtime.
    pub fn standard() -> Self {
        use Transportation::*;

        Self::new(
            10,
            vec![
                EdgeSpec::new(1, 2, Taxi, true),
                EdgeSpec::new(1, 3, Bus, true),
                EdgeSpec::new(2, 8, Boat, false),
                EdgeSpec::new(5, 8, Underground, true),
                EdgeSpec::new(5, 3, Taxi, true),
                EdgeSpec::new(7, 9, Boat, false),
                EdgeSpec::new(7, 4, Taxi, true),
            ],
        )
    }

    /// Largest hop count still written to the distance documents.
    ///
    /// Tied to the board size: no shortest path on `n` vertices is longer
    /// than `n - 1`, so only unreachable pairs fall outside it.
    pub fn distance_cutoff(&self) -> u32 {
        u32::try_from(self.vertex_count).unwrap_or(u32::MAX)
    }

    /// Reject edges whose endpoints fall outside `[0, vertex_count)`.
    pub fn validate(&self) -> Result<()> {
        for (index, edge) in self.edges.iter().enumerate() {
            for vertex in [edge.from, edge.to] {
                if vertex >= self.vertex_count {
                    bail_out_of_range!(index, vertex, self.vertex_count);
                }
            }
        }
        Ok(())
    }
}
