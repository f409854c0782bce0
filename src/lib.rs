pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use adapters::{LocalStorage, SourceFetcher};
pub use app::{build_site, load_gallery, BuildReport};
pub use crate::core::{engine::SiteEngine, gallery::Gallery};
pub use utils::error::{Result, SiteError};
