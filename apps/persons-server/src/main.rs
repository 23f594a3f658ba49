use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use api_ingress::{ApiIngress, ApiIngressConfig};
use persons::{Persons, PersonsConfig};

mod db;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Persons Server - CRUD service for person records
#[derive(Parser)]
#[command(name = "persons-server")]
#[command(about = "Persons Server - CRUD service for person records")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database instead of the configured one
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.as_ref().cloned().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!("Persons Server starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config, args).await,
        Commands::Check => check_config(config, args),
    }
}

/// Final DSN to connect with: `--mock` wins, SQLite paths are made absolute.
fn resolve_dsn(config: &AppConfig, args: &CliArgs) -> Result<String> {
    if args.mock {
        return Ok(db::MEMORY_DSN.to_string());
    }

    let db_config = config.database.clone().unwrap_or_default();
    let dsn = db_config.url.trim().to_owned();
    match db::detect_from_dsn(&dsn)? {
        db::Backend::Sqlite => {
            db::absolutize_sqlite_dsn(&dsn, Path::new(&config.server.home_dir), true)
        }
        db::Backend::Postgres => Ok(dsn),
    }
}

async fn bind_addr(config: &AppConfig) -> Result<SocketAddr> {
    let host = config.server.host.trim();
    let port = config.server.port;
    tokio::net::lookup_host((host, port))
        .await
        .with_context(|| format!("Invalid bind address '{host}:{port}'"))?
        .next()
        .ok_or_else(|| anyhow!("Invalid bind address '{host}:{port}': no addresses resolved"))
}

async fn run_server(config: AppConfig, args: CliArgs) -> Result<()> {
    tracing::info!("Initializing modules...");

    let persons_cfg: PersonsConfig = config.module_config("persons")?;
    let ingress_cfg: ApiIngressConfig = config.module_config("api_ingress")?;
    let addr = bind_addr(&config).await?;

    let dsn = resolve_dsn(&config, &args)?;
    let connect_opts = config
        .database
        .as_ref()
        .map(db::ConnectOpts::from)
        .unwrap_or_default();

    tracing::info!("Connecting to database: {}", db::redact_dsn(&dsn));
    let conn = db::connect(&dsn, &connect_opts).await?;

    let persons = Persons::new(persons_cfg);
    persons.migrate(&conn).await?;
    persons.init(conn);

    let router = persons.register_rest(axum::Router::new())?;
    let ingress = ApiIngress::new(ingress_cfg, Duration::from_secs(config.server.timeout_sec));
    let router = ingress.build_router(router, Some(persons.openapi()))?;

    let shutdown = async {
        if let Err(e) = runtime::shutdown::wait_for_shutdown().await {
            tracing::error!(error = %e, "Signal handling failed, shutting down");
        }
    };

    api_ingress::serve(router, addr, shutdown).await?;
    tracing::info!("Persons Server stopped");
    Ok(())
}

fn check_config(config: AppConfig, args: CliArgs) -> Result<()> {
    tracing::info!("Checking configuration...");

    let _: PersonsConfig = config.module_config("persons")?;
    let _: ApiIngressConfig = config.module_config("api_ingress")?;
    let dsn = resolve_dsn(&config, &args)?;
    tracing::debug!("Database DSN resolved to {}", db::redact_dsn(&dsn));

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Server config:");
    println!("{}", config.to_yaml()?);

    Ok(())
}
