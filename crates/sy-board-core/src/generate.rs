//! Single-pass pipeline: build graph, compute both distance tables,
//! emit and write the three documents.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::board::BoardSpec;
use crate::config::GeneratorConfig;
use crate::document::xml::write_document;
use crate::document::{board_document, distance_document};
use crate::error::Result;
use crate::graph::{shortest_distances, DistanceTable, Faction, Graph};
use crate::trace_time;

/// What kind of document a written file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Board,
    Seekers,
    Hiders,
}

impl From<Faction> for DocumentKind {
    fn from(faction: Faction) -> Self {
        match faction {
            Faction::Seekers => DocumentKind::Seekers,
            Faction::Hiders => DocumentKind::Hiders,
        }
    }
}

/// One file written by [`generate`]
#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    pub kind: DocumentKind,
    pub path: PathBuf,
    /// `boardPosition` or `from` elements
    pub groups: usize,
    /// `action` or `to` elements
    pub entries: usize,
    pub bytes: u64,
}

/// Summary of a generation run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub distance_cutoff: u32,
    pub files: Vec<WrittenFile>,
}

impl GenerationReport {
    pub fn file(&self, kind: DocumentKind) -> Option<&WrittenFile> {
        self.files.iter().find(|f| f.kind == kind)
    }
}

fn compute_table(graph: &Graph, faction: Faction) -> DistanceTable {
    let start = Instant::now();
    let visibility = faction.visibility();
    let table = shortest_distances(graph, |edge| visibility.admits(edge));
    trace_time!(start, "compute_distances", faction = faction.as_str());
    table
}

/// Run the whole transform and write the three documents.
///
/// A failure part-way through may leave earlier files written; nothing is
/// rolled back.
pub fn generate(board: &BoardSpec, config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;

    let start = Instant::now();
    let graph = Graph::build(board)?;
    trace_time!(
        start,
        "build_graph",
        vertices = graph.vertex_count(),
        edges = graph.edge_count()
    );

    let seekers = compute_table(&graph, Faction::Seekers);
    let hiders = compute_table(&graph, Faction::Hiders);
    let cutoff = board.distance_cutoff();

    let mut files = Vec::with_capacity(3);

    let board_doc = board_document(&graph);
    let path = config.board_path();
    let bytes = write_document(&path, &board_doc)?;
    files.push(WrittenFile {
        kind: DocumentKind::Board,
        path,
        groups: board_doc.positions.len(),
        entries: board_doc.action_count(),
        bytes,
    });

    for (faction, table) in [(Faction::Seekers, &seekers), (Faction::Hiders, &hiders)] {
        let doc = distance_document(&graph, table, cutoff);
        let path = config.distances_path(faction);
        let bytes = write_document(&path, &doc)?;
        files.push(WrittenFile {
            kind: faction.into(),
            path,
            groups: doc.sources.len(),
            entries: doc.entry_count(),
            bytes,
        });
    }

    trace_time!(start, "generate", files = files.len());

    Ok(GenerationReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        distance_cutoff: cutoff,
        files,
    })
}
