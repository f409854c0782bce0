use crate::adapters::{HttpFetcher, LocalFetcher};
use crate::domain::ports::ResourceFetcher;
use crate::utils::error::Result;
use crate::utils::validation::is_remote_source;

/// Picks the fetcher for a configured source base: http(s) URLs go over the
/// network, anything else is a local directory.
#[derive(Debug, Clone)]
pub enum SourceFetcher {
    Http(HttpFetcher),
    Local(LocalFetcher),
}

impl SourceFetcher {
    pub fn from_base(base: &str) -> Result<Self> {
        if is_remote_source(base) {
            Ok(SourceFetcher::Http(HttpFetcher::new(base)?))
        } else {
            Ok(SourceFetcher::Local(LocalFetcher::new(base)))
        }
    }
}

impl ResourceFetcher for SourceFetcher {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        match self {
            SourceFetcher::Http(fetcher) => fetcher.fetch(path).await,
            SourceFetcher::Local(fetcher) => fetcher.fetch(path).await,
        }
    }
}
