use std::collections::VecDeque;

use crate::board::VertexId;
use crate::graph::types::{Edge, Graph};

/// Which edges a traversal may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Only edges flagged public
    PublicOnly,
    /// Every edge, public or private
    All,
}

impl Visibility {
    pub fn admits(&self, edge: &Edge) -> bool {
        match self {
            Visibility::PublicOnly => edge.public,
            Visibility::All => true,
        }
    }
}

/// Game faction a distance table is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    /// Restricted to public transport
    Seekers,
    /// May use any transport, private included
    Hiders,
}

impl Faction {
    pub fn visibility(&self) -> Visibility {
        match self {
            Faction::Seekers => Visibility::PublicOnly,
            Faction::Hiders => Visibility::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Seekers => "seekers",
            Faction::Hiders => "hiders",
        }
    }
}

/// All-pairs hop counts; `None` marks an unreachable pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    vertex_count: usize,
    cells: Vec<Option<u32>>,
}

impl DistanceTable {
    fn unreachable(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            cells: vec![None; vertex_count * vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Hop count from `s` to `t`, or `None` if no admitted path exists.
    pub fn get(&self, s: VertexId, t: VertexId) -> Option<u32> {
        self.cells[s * self.vertex_count + t]
    }

    /// Unordered pairs `s < t` that are reachable.
    pub fn reachable_pairs(&self) -> usize {
        (0..self.vertex_count)
            .flat_map(|s| (s + 1..self.vertex_count).map(move |t| (s, t)))
            .filter(|&(s, t)| self.get(s, t).is_some())
            .count()
    }

    fn row_mut(&mut self, s: VertexId) -> &mut [Option<u32>] {
        let start = s * self.vertex_count;
        &mut self.cells[start..start + self.vertex_count]
    }
}

/// Hop counts from `source` to every vertex, using only edges `admit` accepts.
pub fn bfs_from<F>(graph: &Graph, source: VertexId, admit: F, out: &mut [Option<u32>])
where
    F: Fn(&Edge) -> bool,
{
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    out[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let Some(hops) = out[current] else {
            continue;
        };

        for (neighbor, edge) in graph.incident(current) {
            if out[neighbor].is_some() || !admit(edge) {
                continue;
            }
            out[neighbor] = Some(hops + 1);
            queue.push_back(neighbor);
        }
    }
}

/// Unweighted all-pairs shortest distances under an edge predicate.
///
/// Edges rejected by `admit` are invisible to the traversal; the graph itself
/// is left untouched, so one graph serves every visibility regime.
#[tracing::instrument(skip(graph, admit), fields(vertices = graph.vertex_count()))]
pub fn shortest_distances<F>(graph: &Graph, admit: F) -> DistanceTable
where
    F: Fn(&Edge) -> bool,
{
    let mut table = DistanceTable::unreachable(graph.vertex_count());
    for source in graph.vertices() {
        bfs_from(graph, source, &admit, table.row_mut(source));
    }
    tracing::debug!(reachable_pairs = table.reachable_pairs(), "compute_distances");
    table
}
