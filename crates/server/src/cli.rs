//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use proximity_core::Config;

/// Proximity search service over a static point set.
#[derive(Parser, Debug)]
#[command(name = "proximity-server", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Bind host (overrides HOST).
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Bind port (overrides PORT).
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Points JSON file (overrides POINTS_FILE).
    #[arg(long, global = true)]
    pub points: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server (default).
    Serve,
    /// Load and validate the points file, then exit.
    Check,
}

impl Cli {
    pub fn subcommand(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }

    /// Apply command-line overrides on top of the environment config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(points) = &self.points {
            config.storage.points_file = points.clone();
        }
    }
}
