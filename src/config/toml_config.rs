use crate::core::loader::{default_services, DEFAULT_LISTING_URL};
use crate::domain::model::ResourcePaths;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Build configuration. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// http(s) origin or local directory the resource paths resolve against.
    pub base: String,
    pub site_config: String,
    pub products: String,
    pub portfolio: String,
    pub listing: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        let paths = ResourcePaths::default();
        Self {
            base: ".".to_string(),
            site_config: paths.site_config,
            products: paths.products,
            portfolio: paths.portfolio,
            listing: paths.listing,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Used when the manifest carries no `url` of its own.
    pub default_url: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_url: DEFAULT_LISTING_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub archive: bool,
    pub archive_name: String,
    pub templates_dir: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./dist".to_string(),
            archive: false,
            archive_name: "site.zip".to_string(),
            templates_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub services: Vec<String>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            services: default_services(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_source("source.base", &self.source.base)?;
        validation::validate_resource_path("source.site_config", &self.source.site_config)?;
        validation::validate_resource_path("source.products", &self.source.products)?;
        validation::validate_resource_path("source.portfolio", &self.source.portfolio)?;
        validation::validate_resource_path("source.listing", &self.source.listing)?;
        validation::validate_url("listing.default_url", &self.listing.default_url)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_non_empty_list("fallback.services", &self.fallback.services)?;

        if self.output.archive {
            validation::validate_resource_path("output.archive_name", &self.output.archive_name)?;
            if !self.output.archive_name.ends_with(".zip") {
                return Err(SiteError::InvalidConfigValueError {
                    field: "output.archive_name".to_string(),
                    value: self.output.archive_name.clone(),
                    reason: "Archive name must end with .zip".to_string(),
                });
            }
        }

        if let Some(dir) = &self.output.templates_dir {
            validation::validate_path("output.templates_dir", dir)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn source_base(&self) -> &str {
        &self.source.base
    }

    fn resource_paths(&self) -> ResourcePaths {
        ResourcePaths {
            site_config: self.source.site_config.clone(),
            products: self.source.products.clone(),
            portfolio: self.source.portfolio.clone(),
            listing: self.source.listing.clone(),
        }
    }

    fn default_listing_url(&self) -> &str {
        &self.listing.default_url
    }

    fn fallback_services(&self) -> &[String] {
        &self.fallback.services
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn templates_dir(&self) -> Option<&Path> {
        self.output.templates_dir.as_deref().map(Path::new)
    }

    fn archive_name(&self) -> Option<&str> {
        self.output
            .archive
            .then_some(self.output.archive_name.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
