pub mod pages;

use crate::adapters::{LocalStorage, SourceFetcher};
use crate::core::engine::{PageReport, SiteEngine};
use crate::core::gallery::Gallery;
use crate::core::publish::archive_files;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use pages::{PortfolioPage, StorePage};

#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub output_path: String,
    pub pages: Vec<PageReport>,
    pub archive: Option<String>,
}

impl BuildReport {
    pub fn files(&self) -> Vec<String> {
        self.pages
            .iter()
            .flat_map(|report| report.files.iter().cloned())
            .collect()
    }
}

/// Builds the store and portfolio pages concurrently, then optionally bundles
/// every written file into an archive.
pub async fn build_site<C: ConfigProvider>(config: &C) -> Result<BuildReport> {
    let fetcher = SourceFetcher::from_base(config.source_base())?;
    let storage = LocalStorage::new(config.output_path());

    let store = SiteEngine::new(StorePage::new(fetcher.clone(), storage.clone(), config)?);
    let portfolio = SiteEngine::new(PortfolioPage::new(fetcher, storage.clone(), config)?);

    let (store_report, portfolio_report) = tokio::try_join!(store.run(), portfolio.run())?;

    let mut report = BuildReport {
        output_path: config.output_path().to_string(),
        pages: vec![store_report, portfolio_report],
        archive: None,
    };

    if let Some(archive_name) = config.archive_name() {
        let archive = archive_files(&storage, &report.files(), archive_name).await?;
        tracing::info!("Archived site to {}", archive);
        report.archive = Some(archive);
    }

    Ok(report)
}

/// Loads just the package gallery, for the query subcommands.
pub async fn load_gallery<C: ConfigProvider>(config: &C) -> Result<Gallery> {
    let fetcher = SourceFetcher::from_base(config.source_base())?;
    let storage = LocalStorage::new(config.output_path());
    let page = StorePage::new(fetcher, storage, config)?;
    Ok(page.load_gallery().await)
}
