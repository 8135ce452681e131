use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use fragmap::cli::{Cli, Commands};
use fragmap::commands;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            input,
            patterns,
            format,
            output,
        } => {
            let config = commands::recommend::RecommendConfig {
                input,
                patterns,
                format,
                output,
            };
            commands::recommend::handle_recommend(config)
        }
        Commands::Init { force } => commands::init::init_config(force),
    }
}
