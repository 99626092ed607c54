use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::report::OutputFormat;

/// Extract fenced example blocks from a spec document as test cases
#[derive(Parser)]
#[command(name = "spec-extract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to the spec document [default: spec.txt]
    #[arg(short, long, global = true)]
    pub spec: Option<PathBuf>,

    /// Only consider examples whose section matches this regex (case-insensitive)
    #[arg(short = 'P', long, global = true)]
    pub pattern: Option<String>,

    /// Only consider the example with the given number
    #[arg(short, long, global = true)]
    pub number: Option<u32>,

    /// Config file to use instead of searching for .spec-extract.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Dump the selected examples as structured data
    Dump {
        /// Output format [default: from config, else json]
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print a one-line header for each selected example
    List,

    /// Copy stdin to stdout unchanged
    Normalize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dump_with_short_flags() {
        let cli = Cli::try_parse_from([
            "spec-extract", "-s", "gfm.txt", "-P", "tabs", "-n", "3", "dump",
        ])
        .unwrap();

        assert_eq!(cli.global.spec, Some(PathBuf::from("gfm.txt")));
        assert_eq!(cli.global.pattern, Some("tabs".to_string()));
        assert_eq!(cli.global.number, Some(3));
        assert!(matches!(cli.command, Command::Dump { format: None }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "spec-extract", "dump", "--format", "yaml", "--pattern", "links", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.global.pattern, Some("links".to_string()));
        assert_eq!(cli.global.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Dump {
                format: Some(OutputFormat::Yaml)
            }
        ));
    }

    #[test]
    fn reject_non_numeric_example_number() {
        assert!(Cli::try_parse_from(["spec-extract", "-n", "abc", "list"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["spec-extract"]).is_err());
    }
}
