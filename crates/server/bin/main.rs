//! The incrementality server binary.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use incrementality_configuration::environment::ProcessEnvironment;
use incrementality_configuration::{write_parsed_configuration, ParsedConfiguration};
use incrementality_server::{cors_layer, create_router, create_state, load_configuration};
use query_engine_execution::metrics::Metrics;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Directory holding configuration.json.
    #[arg(
        long,
        env = "INCREMENTALITY_CONFIGURATION_DIRECTORY",
        default_value = "."
    )]
    configuration: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API.
    Serve(ServeOptions),
    /// Create the schema and insert the embedded fixture set.
    LoadFixtures,
    /// Write the initial configuration and its JSON schema.
    Initialize,
}

#[derive(clap::Args)]
struct ServeOptions {
    #[arg(long, env = "INCREMENTALITY_HOST", default_value = "0.0.0.0")]
    host: IpAddr,
    #[arg(long, env = "PORT", default_value_t = 5001)]
    port: u16,
    /// Origins allowed to call the API; `*` allows any.
    #[arg(
        long = "cors-origin",
        env = "INCREMENTALITY_CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve(options) => serve(&cli.configuration, options).await,
        Command::LoadFixtures => load_fixtures(&cli.configuration).await,
        Command::Initialize => initialize(&cli.configuration).await,
    }
}

async fn serve(configuration_dir: &Path, options: ServeOptions) -> anyhow::Result<()> {
    let configuration = load_configuration(configuration_dir, ProcessEnvironment)
        .await
        .context("unable to load configuration")?;
    tracing::info!(connection = ?configuration.connection, "configuration loaded");

    let state = create_state(configuration, prometheus::Registry::new())
        .await
        .context("unable to initialize server state")?;
    let router = create_router(state, cors_layer(&options.cors_origins));

    let address = SocketAddr::new(options.host, options.port);
    tracing::info!(%address, "starting server");
    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn load_fixtures(configuration_dir: &Path) -> anyhow::Result<()> {
    let configuration = load_configuration(configuration_dir, ProcessEnvironment)
        .await
        .context("unable to load configuration")?;
    let metrics = Metrics::unregistered()?;

    match incrementality_fixtures::load(&configuration, &metrics).await {
        Ok(report) => {
            tracing::info!(
                databases = report.databases.len(),
                inserted_records = report.inserted_records,
                inserted_brands = report.inserted_brands,
                read_back = report.read_back.len(),
                "fixtures loaded"
            );
            Ok(())
        }
        Err(error) => {
            tracing::error!(component = "load_fixtures", %error, "unable to load fixtures");
            Err(error.into())
        }
    }
}

async fn initialize(configuration_dir: &Path) -> anyhow::Result<()> {
    write_parsed_configuration(ParsedConfiguration::initial(), configuration_dir)
        .await
        .with_context(|| format!("unable to write to {}", configuration_dir.display()))?;
    tracing::info!(directory = %configuration_dir.display(), "configuration written");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
