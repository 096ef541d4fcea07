use std::time::Instant;

use sy_board_core::board::BoardSpec;
use sy_board_core::config::GeneratorConfig;
use sy_board_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = GeneratorConfig::with_out_dir(&cli.out_dir);
    debug!(elapsed = ?start.elapsed(), out_dir = %config.out_dir.display(), "resolve_config");

    super::generate::execute(cli, &BoardSpec::standard(), &config)
}
