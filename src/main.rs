//! itemsrv
//!
//! A minimal HTTP server listing items stored in SQLite.
//!
//! ```text
//! itemsrv [-a <address:port>] [--sqlitedb <path>] [--config <file>]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use itemsrv::config::{load_config, validate_config, AppConfig, ConfigError};
use itemsrv::lifecycle;
use itemsrv::observability::init_logging;

#[derive(Parser)]
#[command(name = "itemsrv")]
#[command(version, about = "itemsrv - a minimal item server backed by SQLite", long_about = None)]
struct Cli {
    /// Address for the server to listen on [default: :8080]
    #[arg(short = 'a', long = "addr")]
    addr: Option<String>,

    /// Path to the SQLite database, created if it does not exist [default: app.db]
    #[arg(long = "sqlitedb")]
    sqlitedb: Option<String>,

    /// Optional TOML configuration file; flags take precedence over it
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => AppConfig::default(),
        };

        if let Some(addr) = self.addr {
            config.listener.bind_address = addr;
        }
        if let Some(path) = self.sqlitedb {
            config.database.path = path;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&*e));
            ExitCode::from(1)
        }
    }
}

fn failure_message(err: &dyn std::error::Error) -> String {
    format!("itemsrv: unable to start server: {err}")
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.into_config()?;
    init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        database = %config.database.path,
        request_timeout_secs = config.timeouts.request_secs,
        "itemsrv starting"
    );

    lifecycle::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
