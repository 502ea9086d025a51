//! CLI command implementations
//!
//! Boot order for `serve`: load config, bootstrap the store (tables + seed),
//! build the router, serve. `init` stops after the bootstrap.

use std::path::{Path, PathBuf};

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::{init_tracing, log_event, log_event_with_fields, Event};
use crate::store::{Database, SeedReport};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config, database } => {
            let config = resolve_config(config.as_deref(), None, database)?;
            init(&config).map(|_| ())
        }
        Command::Serve {
            config,
            port,
            database,
        } => {
            let config = resolve_config(config.as_deref(), port, database)?;
            serve(config)
        }
    }
}

/// Load the config file (or defaults) and apply command-line overrides
fn resolve_config(
    path: Option<&Path>,
    port: Option<u16>,
    database: Option<PathBuf>,
) -> CliResult<ServerConfig> {
    let mut config = ServerConfig::load_or_default(path)?;

    if let Some(port) = port {
        config.port = port;
    }
    if let Some(database) = database {
        config.database_path = database;
    }
    config.validate()?;

    let addr = config.socket_addr();
    let database_path = config.database_path.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("addr", addr.as_str()), ("database_path", database_path.as_str())],
    );

    Ok(config)
}

/// Create the store file, ensure tables exist and seed empty tables
pub fn init(config: &ServerConfig) -> CliResult<SeedReport> {
    let db = Database::new(config.database_path.clone());
    let report = db.bootstrap()?;

    let database_path = db.path().display().to_string();
    log_event_with_fields(Event::SchemaReady, &[("database_path", database_path.as_str())]);

    if report.inserted() == 0 {
        log_event(Event::SeedSkipped);
    } else {
        let flavors = report.flavors.to_string();
        let ingredients = report.ingredients.to_string();
        log_event_with_fields(
            Event::SeedApplied,
            &[("flavors", flavors.as_str()), ("ingredients", ingredients.as_str())],
        );
    }

    Ok(report)
}

/// Bootstrap the store and serve until shutdown
pub fn serve(config: ServerConfig) -> CliResult<()> {
    log_event(Event::BootStart);
    init_tracing();

    init(&config)?;

    let server = HttpServer::with_config(config);
    log_event(Event::BootComplete);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}
