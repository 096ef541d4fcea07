//! Generate the three board documents and report what was written

use sy_board_core::board::BoardSpec;
use sy_board_core::config::GeneratorConfig;
use sy_board_core::error::Result;
use sy_board_core::generate::{generate, DocumentKind, GenerationReport, WrittenFile};

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, board: &BoardSpec, config: &GeneratorConfig) -> Result<()> {
    let report = generate(board, config)?;

    if cli.quiet {
        return Ok(());
    }

    match cli.format {
        OutputFormat::Human => {
            for file in &report.files {
                println!("{}", human_line(file));
            }
        }
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}

fn human_line(file: &WrittenFile) -> String {
    let (groups, entries) = match file.kind {
        DocumentKind::Board => ("board positions", "actions"),
        DocumentKind::Seekers | DocumentKind::Hiders => ("sources", "distances"),
    };
    format!(
        "wrote {} ({} {}, {} {})",
        file.path.display(),
        file.groups,
        groups,
        file.entries,
        entries
    )
}

fn print_json(report: &GenerationReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
