//! resolve-conflicts - keep the local side of merge conflicts, in place
//!
//! Usage: resolve-conflicts [--check] [--json] <PATH>...
//!
//! Every file is resolved first; with `--check` each file is then scanned
//! and any remaining marker lines are listed.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use textfix::application::ResolveOptions;
use textfix::presentation::cli::ResolveCli;
use textfix::presentation::{create_event_sink, create_resolve_use_case, error, logging};

fn main() -> ExitCode {
    let cli = ResolveCli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if error::is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            error::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &ResolveCli) -> Result<()> {
    let options = ResolveOptions::from(cli);
    let use_case = create_resolve_use_case();
    let sink = create_event_sink(cli.json);

    use_case.execute(&options, sink.as_ref())?;
    Ok(())
}
