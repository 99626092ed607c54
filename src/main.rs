use anyhow::Result;
use clap::Parser;
use spec_extract::cli::{Cli, Command};
use spec_extract::commands::dump::{self, DumpArgs};
use spec_extract::commands::{SelectArgs, list, normalize};
use spec_extract::config::ExtractConfig;
use spec_extract::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    match cli.command {
        Command::Normalize => {
            normalize::execute()?;
        }
        Command::Dump { format } => {
            let config = ExtractConfig::discover(cli.global.config.as_deref())?;
            dump::execute(DumpArgs {
                select: SelectArgs::resolve(&cli.global, &config),
                format: format.unwrap_or(config.output.format),
            })?;
        }
        Command::List => {
            let config = ExtractConfig::discover(cli.global.config.as_deref())?;
            list::execute(SelectArgs::resolve(&cli.global, &config))?;
        }
    }

    Ok(())
}
