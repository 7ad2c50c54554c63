use clap::Parser;
use snapdrill::cli::{execute, Cli};
use snapdrill::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    for path in execute(&cli)? {
        println!("{}", path.display());
    }

    Ok(())
}
