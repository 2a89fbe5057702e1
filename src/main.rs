use clap::Parser;
use firstdiff::config::Cli;
use firstdiff::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    firstdiff::commands::compare::run(config)?;

    Ok(())
}
