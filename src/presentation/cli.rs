use std::path::PathBuf;

use clap::Parser;

use crate::application::{PrintLinesOptions, ResolveOptions};

/// Print a numbered range of lines from a file
#[derive(Parser, Debug)]
#[command(name = "print-lines")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct PrintLinesCli {
    /// File to read
    pub path: PathBuf,

    /// First line to print (1-based, inclusive)
    pub start: i64,

    /// Last line to print (inclusive)
    pub end: i64,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl From<&PrintLinesCli> for PrintLinesOptions {
    fn from(cli: &PrintLinesCli) -> Self {
        PrintLinesOptions::new(cli.path.clone(), cli.start, cli.end)
    }
}

/// Resolve merge conflicts in place by keeping the local ("ours") side
#[derive(Parser, Debug)]
#[command(name = "resolve-conflicts")]
#[command(version, about, long_about = None)]
#[command(after_help = "Files are rewritten in place. --check lists leftover marker lines after resolving.")]
pub struct ResolveCli {
    /// After resolving, list marker lines still present in each file
    #[arg(long, overrides_with = "check")]
    pub check: bool,

    /// Output events as NDJSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Files to resolve
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

const CHECK_FLAG: &str = "--check";

impl From<&ResolveCli> for ResolveOptions {
    /// `--check` counts even when it follows `--` and lands among the paths.
    fn from(cli: &ResolveCli) -> Self {
        let (flags, paths): (Vec<_>, Vec<_>) = cli
            .paths
            .iter()
            .cloned()
            .partition(|p| p.as_os_str() == CHECK_FLAG);

        ResolveOptions::new()
            .with_paths(paths)
            .with_check(cli.check || !flags.is_empty())
    }
}
