//! Command-line definitions for the `nebula` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::SiteConfig;

/// NebulaStack Labs marketing site
#[derive(Parser, Debug)]
#[command(name = "nebula")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "NEBULA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands. Defaults to `serve`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the site
    Serve(ServeArgs),

    /// Inspect or export site content
    Content {
        /// What to do with the content
        #[command(subcommand)]
        action: ContentAction,
    },
}

/// Overrides applied on top of the configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "NEBULA_HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long, env = "NEBULA_PORT")]
    pub port: Option<u16>,

    /// Content file (TOML); built-in content when unset
    #[arg(long, env = "NEBULA_CONTENT")]
    pub content: Option<PathBuf>,

    /// Number of recent inquiries shown on the page
    #[arg(long, env = "NEBULA_RECENT")]
    pub recent: Option<usize>,
}

impl ServeArgs {
    /// Apply every flag that was given to `config`.
    pub fn apply_to(&self, config: &mut SiteConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(content) = &self.content {
            config.site.content = Some(content.clone());
        }
        if let Some(recent) = self.recent {
            config.site.recent_inquiries = recent;
        }
    }
}

/// `content` subcommands.
#[derive(Subcommand, Debug)]
pub enum ContentAction {
    /// Write the built-in content as TOML
    Export {
        /// Output file; stdout when omitted
        file: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Load and validate a content file
    Check {
        /// Content file to check
        file: PathBuf,
    },
}
