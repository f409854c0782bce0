use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "vpm-site")]
#[command(about = "Builds the store and portfolio pages from the site's JSON data")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Source base: http(s) origin or local directory holding the JSON resources
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Output directory for the generated pages
    #[arg(long, global = true)]
    pub output_path: Option<String>,

    /// Also bundle the generated files into a zip archive
    #[arg(long, global = true)]
    pub archive: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render both pages into the output directory (default)
    Build,
    /// List packages matching a query (id, name or description)
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Show the detail view of one package
    Info { id: String },
    /// Print the download URL of a package's latest release
    Download { id: String },
    /// Print the VCC add-repository link for the listing
    AddRepoUrl,
}

impl CliConfig {
    /// Loads the TOML file (or defaults) and applies command-line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(source) = &self.source {
            config.source.base = source.clone();
        }
        if let Some(output_path) = &self.output_path {
            config.output.path = output_path.clone();
        }
        if self.archive {
            config.output.archive = true;
        }

        Ok(config)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Build)
    }
}
