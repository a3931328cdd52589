use clap::Parser;

use gpgseal::cli::{self, Cli, Commands};
use gpgseal::config::app_config::AppConfig;

fn main() {
    env_logger::init();

    let args = Cli::parse();

    let result = AppConfig::load(args.config.as_deref()).and_then(|config| {
        match &args.command {
            Commands::Seal {
                file,
                key,
                out,
                json,
            } => cli::commands::seal::execute(
                file.as_deref(),
                key,
                out.as_deref(),
                *json,
                &config,
                args.verbose,
            ),
            Commands::Inspect { key } => cli::commands::inspect::execute(key),
            Commands::Hash { file } => cli::commands::hash::execute(file.as_deref()),
        }
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
