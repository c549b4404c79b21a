//! Handler functions for the `nebula` subcommands.

use std::fmt;
use std::path::Path;

use nebula_content::ContentStore;

use crate::cli::{Cli, Command, ContentAction, ServeArgs};
use crate::config::SiteConfig;
use crate::server::Server;
use crate::state::AppState;
use crate::{Error, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Run the command selected on the command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        None => cmd_serve(config_path, &ServeArgs::default()).await,
        Some(Command::Serve(args)) => cmd_serve(config_path, &args).await,
        Some(Command::Content { action }) => match action {
            ContentAction::Export { file, force } => cmd_content_export(file.as_deref(), force),
            ContentAction::Check { file } => {
                let summary = cmd_content_check(&file)?;
                println!("{summary}");
                Ok(())
            }
        },
    }
}

// ============================================================================
// serve
// ============================================================================

/// Resolve configuration, load content, and run the site.
pub async fn cmd_serve(config_path: Option<&Path>, args: &ServeArgs) -> Result<()> {
    let config = resolve_config(config_path, args)?;
    let content = load_content(config.site.content.as_deref())?;
    let state = AppState::in_memory(content).with_recent_limit(config.site.recent_inquiries);
    Server::new(config, state).run().await
}

/// Configuration file values with command-line overrides applied.
pub fn resolve_config(config_path: Option<&Path>, args: &ServeArgs) -> Result<SiteConfig> {
    let mut config = SiteConfig::load(config_path)?;
    args.apply_to(&mut config);
    Ok(config)
}

/// Load content from `path`, or the built-in content when `None`.
pub fn load_content(path: Option<&Path>) -> Result<ContentStore> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading site content");
            Ok(ContentStore::load(path)?)
        }
        None => Ok(ContentStore::default()),
    }
}

// ============================================================================
// content
// ============================================================================

/// Write the built-in content as TOML to `file`, or stdout.
pub fn cmd_content_export(file: Option<&Path>, force: bool) -> Result<()> {
    let toml_str = ContentStore::default().to_toml_string()?;

    let Some(path) = file else {
        print!("{toml_str}");
        return Ok(());
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Content file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    std::fs::write(path, toml_str).map_err(|e| Error::io_with_path(e, path))?;

    println!("Content written to {}", path.display());
    Ok(())
}

/// Record counts of a validated content file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentSummary {
    /// Company name.
    pub company: String,
    /// Number of services.
    pub services: usize,
    /// Number of projects.
    pub projects: usize,
    /// Number of testimonials.
    pub testimonials: usize,
}

impl From<&ContentStore> for ContentSummary {
    fn from(store: &ContentStore) -> Self {
        Self {
            company: store.company.name.clone(),
            services: store.services.len(),
            projects: store.projects.len(),
            testimonials: store.testimonials.len(),
        }
    }
}

impl fmt::Display for ContentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} services, {} projects, {} testimonials",
            self.company, self.services, self.projects, self.testimonials
        )
    }
}

/// Load and validate a content file.
pub fn cmd_content_check(file: &Path) -> Result<ContentSummary> {
    let store = ContentStore::load(file)?;
    Ok(ContentSummary::from(&store))
}

// ============================================================================
// Tests
// ============================================================================
