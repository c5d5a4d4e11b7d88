use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sailing_planner::config::{AppConfig, DEFAULT_DATA_PATH};
use sailing_planner::import::import_file;
use sailing_planner::input::{Prompt, known_port};
use sailing_planner::planner::StrategyRegistry;
use sailing_planner::repository::InMemoryRepository;
use sailing_planner::web::{AppState, create_router};

/// Find the cheapest or fastest sailings between two ports.
#[derive(Parser, Debug)]
#[command(name = "sailing-planner", version, about, long_about = None)]
struct Cli {
    /// Schedule document to import.
    #[arg(long, env = "SAILING_DATA", default_value = DEFAULT_DATA_PATH, global = true)]
    data: PathBuf,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one search and print the sailings as JSON. Missing values are prompted for.
    Search(SearchArgs),

    /// Serve the HTTP API.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Origin port code.
    #[arg(long)]
    origin: Option<String>,

    /// Destination port code.
    #[arg(long)]
    destination: Option<String>,

    /// Search criteria: cheapest-direct, cheapest or fastest.
    #[arg(long)]
    criteria: Option<String>,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to listen on.
    #[arg(long, env = "SAILING_ADDR", default_value = "127.0.0.1:3000")]
    addr: SocketAddr,
}

impl Cli {
    fn config(&self) -> AppConfig {
        let config = AppConfig::new(&self.data).with_verbosity(self.verbose);
        match &self.command {
            Commands::Serve(args) => config.with_listen_addr(args.addr),
            Commands::Search(_) => config,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Search(args) => run_search(&config, args),
        Commands::Serve(_) => run_serve(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load(config: &AppConfig) -> anyhow::Result<InMemoryRepository> {
    let repo = import_file(&config.data_path)
        .with_context(|| format!("failed to import {}", config.data_path.display()))?;
    tracing::info!(
        path = %config.data_path.display(),
        sailings = repo.len(),
        "schedule loaded"
    );
    Ok(repo)
}

fn run_search(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let repo = load(config)?;
    let registry = StrategyRegistry::standard();
    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());

    let origin = match args.origin {
        Some(code) => known_port(&code, &repo)?,
        None => prompt.port("origin port", &repo)?,
    };
    let destination = match args.destination {
        Some(code) => known_port(&code, &repo)?,
        None => prompt.port("destination port", &repo)?,
    };
    let criteria = match args.criteria {
        Some(criteria) => criteria,
        None => prompt.criteria(&registry)?.to_string(),
    };

    let records = registry.search(&criteria, &repo, &origin, &destination)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn run_serve(config: &AppConfig) -> anyhow::Result<()> {
    let repo = load(config)?;
    let state = AppState::new(repo, StrategyRegistry::standard());
    let app = create_router(state);
    let addr = config.listen_addr;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!(%addr, "listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("shutting down");
}
