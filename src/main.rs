//! WebDriver dispatch tool.
//!
//! Builds the route table the protocol server dispatches with, and lets an
//! operator inspect it.
//!
//! ```text
//! webdriver-dispatch [--config FILE] routes [--json]
//! webdriver-dispatch [--config FILE] resolve PATH... [--json]
//! webdriver-dispatch  --config FILE  check
//! webdriver-dispatch  --config FILE  watch
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use webdriver_dispatch::config::{load_config, ConfigWatcher, DispatchConfig, ReloadEvent};
use webdriver_dispatch::lifecycle::build_route_table;
use webdriver_dispatch::observability::init_logging;
use webdriver_dispatch::routing::{RouteTable, SharedRouteTable};

#[derive(Parser)]
#[command(name = "webdriver-dispatch")]
#[command(about = "Inspect the WebDriver command route table", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the configured log level.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in resolution order
    Routes {
        #[arg(long)]
        json: bool,
    },
    /// Show which command handles each path
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,

        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration file
    Check,
    /// Rebuild the table whenever the configuration file changes
    Watch,
}

#[derive(Serialize)]
struct Resolution {
    path: String,
    pattern: Option<String>,
    command: Option<&'static str>,
    captures: Vec<String>,
}

impl Resolution {
    fn new(table: &RouteTable, path: &str) -> Self {
        match table.create_command(path) {
            Some(command) => Self {
                path: path.to_string(),
                pattern: table.lookup(path).map(|r| r.pattern().to_string()),
                command: Some(command.name()),
                captures: command.context().captures().to_vec(),
            },
            None => Self {
                path: path.to_string(),
                pattern: None,
                command: None,
                captures: Vec::new(),
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match load_or_report(path) {
            Ok(config) => config,
            Err(message) => {
                eprintln!("error: {}", message);
                std::process::exit(1);
            }
        },
        None => DispatchConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    init_logging(&config.logging);

    match cli.command {
        Commands::Routes { json } => {
            let table = build_route_table(&config.routes);
            if json {
                println!("{}", serde_json::to_string_pretty(&table.summaries())?);
            } else {
                for route in table.summaries() {
                    println!("{:<45} {}", route.pattern, route.command);
                }
            }
        }
        Commands::Resolve { paths, json } => {
            let table = build_route_table(&config.routes);
            let resolutions: Vec<Resolution> =
                paths.iter().map(|p| Resolution::new(&table, p)).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&resolutions)?);
            } else {
                for r in &resolutions {
                    match (&r.pattern, r.command) {
                        (Some(pattern), Some(command)) => {
                            println!("{} -> {} ({}) {:?}", r.path, command, pattern, r.captures)
                        }
                        _ => println!("{} -> no match", r.path),
                    }
                }
            }
        }
        Commands::Check => {
            let path = required_config(&cli.config)?;
            let routes = build_route_table(&config.routes).len();
            tracing::info!(path = ?path, routes, "Configuration is valid");
        }
        Commands::Watch => {
            let path = required_config(&cli.config)?;
            watch(path, &config).await?;
        }
    }

    Ok(())
}

fn required_config(config: &Option<PathBuf>) -> Result<&Path, Box<dyn std::error::Error>> {
    config
        .as_deref()
        .ok_or_else(|| "this command requires --config".into())
}

async fn watch(path: &Path, config: &DispatchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let shared = SharedRouteTable::new(build_route_table(&config.routes));

    let (watcher, mut events) = ConfigWatcher::new(path, shared);
    let _watcher = watcher.run()?;

    loop {
        tokio::select! {
            Some(event) = events.recv() => {
                if let ReloadEvent::Applied { routes } = event {
                    tracing::info!(routes, "Routes reloaded");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}

/// Loads `path`, rendering failures as a readable message.
fn load_or_report(path: &Path) -> Result<DispatchConfig, String> {
    load_config(path).map_err(|e| format!("{}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_uses_display_message() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[logging]\nlevel = \"loud\"\n").unwrap();

        let message = load_or_report(file.path()).unwrap_err();
        assert!(message.ends_with("Validation failed: unknown log level 'loud'"));
        assert!(message.starts_with(&file.path().display().to_string()));
    }
}
