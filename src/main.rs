use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn, Level};
use ttrscore::catalog::{ApiClient, CatalogSource, FileSource};
use ttrscore::config::AppConfig;
use ttrscore::error::ScoreResult;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON settings file; flags typed on the command line win over it.
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    /// Read destinations and roads from a local JSON bundle instead of the API.
    #[arg(global = true, long)]
    catalog_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    #[command(flatten)]
    settings: AppConfig,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Catalog(cmd::catalog::CatalogArgs),
    Replay(cmd::replay::ReplayArgs),
}

#[tokio::main]
async fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚂 Initializing Ticket to Ride score sheet...");

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading settings from: {}", path.display());
            let mut file_config = AppConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(&cli.settings, &matches);
            file_config
        }
        None => cli.settings.clone(),
    };

    if let Err(e) = config.validate() {
        error!("{}", e);
        process::exit(1);
    }

    let result = match &cli.catalog_file {
        Some(path) => {
            info!("📂 Using local catalog: {}", path.display());
            execute(&cli.command, &FileSource::new(path), &config).await
        }
        None => {
            info!("🌐 Using catalog API: {}", config.api.api_url);
            match ApiClient::new(config.api.api_url.clone()) {
                Ok(client) => execute(&cli.command, &client, &config).await,
                Err(e) => {
                    warn!("Could not build HTTP client");
                    Err(e)
                }
            }
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

async fn execute<S: CatalogSource>(
    command: &Commands,
    source: &S,
    config: &AppConfig,
) -> ScoreResult<()> {
    match command {
        Commands::Catalog(args) => cmd::catalog::run(args, source, &config.rules).await,
        Commands::Replay(args) => {
            cmd::replay::run(args, source, config.rules.clone()).await?;
            Ok(())
        }
    }
}
