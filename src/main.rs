use anyhow::Result;
use clap::Parser;
use webaudit::cli::{Cli, Commands};
use webaudit::commands::analyze::{self, AnalyzeConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            no_context,
        } => analyze::run(AnalyzeConfig {
            path,
            format,
            output,
            include_context: !no_context,
        }),
    }
}
