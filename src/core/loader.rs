use crate::domain::model::{
    PortfolioData, Product, ProductsDocument, RawListingDocument, ResourcePaths, SiteConfig,
};
use crate::domain::ports::ResourceFetcher;
use crate::utils::error::{Result, SiteError};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub const DEFAULT_LISTING_URL: &str = "https://valenvrc.com/index.json";

pub const DEFAULT_SERVICES: [&str; 6] = [
    "World Setups",
    "Custom Scripts",
    "Optimization",
    "Light Baking",
    "Interactive Elements",
    "Udon Programming",
];

/// Site configuration plus the product catalog. Loaded as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteData {
    pub config: SiteConfig,
    pub products: Vec<Product>,
}

impl SiteData {
    pub fn fallback(services: &[String]) -> Self {
        let mut config = SiteConfig::default();
        config.commissions.services = services.to_vec();
        Self {
            config,
            products: Vec::new(),
        }
    }
}

pub fn default_services() -> Vec<String> {
    DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect()
}

pub async fn fetch_json<F, T>(fetcher: &F, path: &str) -> Result<T>
where
    F: ResourceFetcher,
    T: DeserializeOwned,
{
    let bytes = fetcher.fetch(path).await?;
    serde_json::from_slice(&bytes).map_err(|e| SiteError::Decode {
        resource: path.to_string(),
        message: e.to_string(),
    })
}

pub struct DataLoader<F: ResourceFetcher> {
    fetcher: F,
    paths: ResourcePaths,
}

impl<F: ResourceFetcher> DataLoader<F> {
    pub fn new(fetcher: F, paths: ResourcePaths) -> Self {
        Self { fetcher, paths }
    }

    pub fn paths(&self) -> &ResourcePaths {
        &self.paths
    }

    /// Fetches every path in parallel and decodes it as JSON. Fails on the
    /// first fetch or decode error.
    pub async fn load_resources(
        &self,
        paths: &[&str],
    ) -> Result<HashMap<String, serde_json::Value>> {
        let fetches = paths.iter().map(|path| async move {
            let value: serde_json::Value = fetch_json(&self.fetcher, path).await?;
            Ok::<_, SiteError>((path.to_string(), value))
        });

        let loaded = futures::future::try_join_all(fetches).await?;
        Ok(loaded.into_iter().collect())
    }

    /// Site configuration and products, all-or-nothing.
    pub async fn try_load_site_data(&self) -> Result<SiteData> {
        let paths = [self.paths.site_config.as_str(), self.paths.products.as_str()];
        let loaded = self.load_resources(&paths).await?;

        let config: SiteConfig = decode_loaded(&loaded, paths[0])?;
        let products: ProductsDocument = decode_loaded(&loaded, paths[1])?;
        Ok(SiteData {
            config,
            products: products.products,
        })
    }

    /// Like [`try_load_site_data`](Self::try_load_site_data) but substitutes the
    /// built-in default for the whole pair on any failure.
    pub async fn load_site_data(&self, fallback_services: &[String]) -> SiteData {
        match self.try_load_site_data().await {
            Ok(data) => {
                tracing::info!(
                    "Loaded site config ({} services) and {} products",
                    data.config.commissions.services.len(),
                    data.products.len()
                );
                data
            }
            Err(e) => {
                tracing::warn!("Could not load data files: {}", e);
                SiteData::fallback(fallback_services)
            }
        }
    }

    pub async fn load_listing(&self) -> Result<RawListingDocument> {
        let listing: RawListingDocument = fetch_json(&self.fetcher, &self.paths.listing).await?;
        tracing::info!("Loaded package listing with {} packages", listing.packages.len());
        Ok(listing)
    }

    /// Portfolio document and site configuration, all-or-nothing, no fallback.
    pub async fn load_portfolio(&self) -> Result<(PortfolioData, SiteConfig)> {
        let paths = [self.paths.portfolio.as_str(), self.paths.site_config.as_str()];
        let loaded = self.load_resources(&paths).await?;

        Ok((
            decode_loaded(&loaded, paths[0])?,
            decode_loaded(&loaded, paths[1])?,
        ))
    }
}

/// Decodes one entry of a [`DataLoader::load_resources`] result.
fn decode_loaded<T: DeserializeOwned>(
    loaded: &HashMap<String, serde_json::Value>,
    path: &str,
) -> Result<T> {
    let value = loaded.get(path).ok_or_else(|| SiteError::Decode {
        resource: path.to_string(),
        message: "resource was not loaded".to_string(),
    })?;
    serde_json::from_value(value.clone()).map_err(|e| SiteError::Decode {
        resource: path.to_string(),
        message: e.to_string(),
    })
}
