//! print-lines - print a numbered range of lines from a file
//!
//! Usage: print-lines <PATH> <START> <END>
//!
//! Each selected line is printed as `{n}: {line}`.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use textfix::application::PrintLinesOptions;
use textfix::presentation::cli::PrintLinesCli;
use textfix::presentation::{create_print_lines_use_case, error, logging};

fn main() -> ExitCode {
    let cli = PrintLinesCli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if error::is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            error::print_error(&err, false);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &PrintLinesCli) -> Result<()> {
    let options = PrintLinesOptions::from(cli);
    let use_case = create_print_lines_use_case();

    let mut out = BufWriter::new(io::stdout().lock());
    use_case.execute(&options, &mut out)?;
    Ok(())
}
