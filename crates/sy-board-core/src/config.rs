//! Generator configuration
//!
//! Controls where the three documents land. The board itself is not
//! configurable; see [`BoardSpec::standard`](crate::board::BoardSpec::standard).

use std::path::{Path, PathBuf};

use crate::bail_usage;
use crate::error::Result;
use crate::graph::Faction;

pub const BOARD_FILE: &str = "board_file.xml";
pub const SEEKERS_DISTANCES_FILE: &str = "seekers_distances_file.xml";
pub const HIDERS_DISTANCES_FILE: &str = "hiders_distances_file.xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory the documents are written into (must already exist)
    pub out_dir: PathBuf,
    pub board_file: String,
    pub seekers_file: String,
    pub hiders_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            board_file: BOARD_FILE.to_string(),
            seekers_file: SEEKERS_DISTANCES_FILE.to_string(),
            hiders_file: HIDERS_DISTANCES_FILE.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    pub fn board_path(&self) -> PathBuf {
        self.out_dir.join(&self.board_file)
    }

    pub fn distances_path(&self, faction: Faction) -> PathBuf {
        match faction {
            Faction::Seekers => self.out_dir.join(&self.seekers_file),
            Faction::Hiders => self.out_dir.join(&self.hiders_file),
        }
    }

    /// The output directory must exist before anything is written.
    pub fn validate(&self) -> Result<()> {
        if !is_dir(&self.out_dir) {
            bail_usage!(format!(
                "output directory does not exist or is not a directory: {}",
                self.out_dir.display()
            ));
        }
        Ok(())
    }
}

fn is_dir(path: &Path) -> bool {
    path.metadata().map(|m| m.is_dir()).unwrap_or(false)
}
