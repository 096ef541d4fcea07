use crate::board::{BoardSpec, Transportation, VertexId};
use crate::error::Result;

/// An undirected edge; attributes are identical in both traversal directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub transportation: Transportation,
    pub public: bool,
}

impl Edge {
    /// The endpoint opposite `from`.
    pub fn other(&self, from: VertexId) -> VertexId {
        if self.a == from {
            self.b
        } else {
            self.a
        }
    }
}

/// Immutable undirected board graph.
///
/// Edges live in construction order; each vertex keeps the indices of its
/// incident edges in that same order, so adjacency listings are deterministic.
#[derive(Debug, Clone)]
pub struct Graph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<usize>>,
}

impl Graph {
    /// Build the graph for `board`, failing on any endpoint outside the board.
    #[tracing::instrument(skip(board), fields(vertices = board.vertex_count, edges = board.edges.len()))]
    pub fn build(board: &BoardSpec) -> Result<Self> {
        board.validate()?;

        let mut incidence = vec![Vec::new(); board.vertex_count];
        let mut edges = Vec::with_capacity(board.edges.len());

        for (index, spec) in board.edges.iter().enumerate() {
            edges.push(Edge {
                a: spec.from,
                b: spec.to,
                transportation: spec.transportation,
                public: spec.public,
            });
            incidence[spec.from].push(index);
            if spec.to != spec.from {
                incidence[spec.to].push(index);
            }
        }

        Ok(Self { edges, incidence })
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        0..self.vertex_count()
    }

    /// `(neighbor, edge)` pairs for every edge touching `v`, in construction order.
    pub fn incident(&self, v: VertexId) -> impl Iterator<Item = (VertexId, &Edge)> + '_ {
        self.incidence[v].iter().map(move |&index| {
            let edge = &self.edges[index];
            (edge.other(v), edge)
        })
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.incidence[v].len()
    }

    /// A vertex with no incident edges never appears in any output document.
    pub fn is_isolated(&self, v: VertexId) -> bool {
        self.incidence[v].is_empty()
    }
}
