//! Top-level CLI parser for the `cru` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cru", version, about = "Crucible - bounded submission grading")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a suite against every discovered submission.
    Run(RunArgs),
    /// Discover submissions and print authors with their units.
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Suite file with the cases to evaluate.
    #[arg(long)]
    pub suite: PathBuf,

    /// Submissions directory (defaults to the configured one).
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Submissions directory (defaults to the configured one).
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_parses_suite_and_dir() {
        let cli = Cli::parse_from(["cru", "run", "--suite", "suite.toml", "--dir", "subs"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.suite, PathBuf::from("suite.toml"));
                assert_eq!(args.dir, Some(PathBuf::from("subs")));
                assert_eq!(args.output, None);
            }
            Commands::List(_) => panic!("expected run command"),
        }
    }
}
