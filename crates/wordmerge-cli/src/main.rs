mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;

/// wordmerge: learn and apply BPE subword segmentation.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }
}
