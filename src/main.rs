mod passes;
mod web;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::process::ExitCode;

use crate::passes::{format::write_report, PassClient};
use crate::web::config::{Config, SourceMode};

#[derive(Parser)]
#[command(name = "sat-watch")]
#[command(about = "Satellite visual pass watcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the visual passes page
    Serve(ConfigArgs),
    /// Print visual passes for the configured satellites
    Passes(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    /// Configuration file (defaults apply if it does not exist)
    #[arg(long, default_value = "sat-watch.yaml")]
    config: String,
    /// Read fixture files instead of calling the API
    #[arg(long, conflicts_with = "live")]
    offline: bool,
    /// Call the API instead of reading fixture files
    #[arg(long)]
    live: bool,
}

impl ConfigArgs {
    fn load(&self) -> Result<Config, String> {
        let mut config = Config::from_file_or_default(&self.config)
            .map_err(|e| format!("{}: {}", self.config, e))?;
        if self.offline {
            config.source.mode = SourceMode::Offline;
        }
        if self.live {
            config.source.mode = SourceMode::Live;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let (args, serve) = match &cli.command {
        Commands::Serve(args) => (args, true),
        Commands::Passes(args) => (args, false),
    };

    let config = match args.load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if serve {
        serve_page(config).await
    } else {
        print_passes(config).await
    }
}

async fn serve_page(config: Config) -> ExitCode {
    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn print_passes(config: Config) -> ExitCode {
    let client = PassClient::new(config.data_source());
    let outcome = client.fetch_reports(&config.satellites).await;

    let mut stdout = io::stdout().lock();
    for report in &outcome.reports {
        if let Err(e) = write_report(&mut stdout, report).and_then(|_| writeln!(stdout)) {
            eprintln!("Error writing report: {}", e);
            return ExitCode::FAILURE;
        }
    }

    match outcome.error {
        Some(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}
