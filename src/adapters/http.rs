use crate::domain::ports::ResourceFetcher;
use crate::utils::error::{Result, SiteError};
use reqwest::Client;
use url::Url;

/// Fetches resources from an http(s) origin. One attempt per call; no retry,
/// no timeout beyond the client defaults.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: &str) -> Result<Self> {
        // Url::join drops the last path segment unless the base ends with '/'.
        let base = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{}/", base))?
        };
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }
}

impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.resolve(path)?;
        tracing::debug!("Fetching resource: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Resource {} responded with status {}", path, status);

        if !status.is_success() {
            return Err(SiteError::ResourceStatus {
                resource: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_resolve_keeps_base_path() {
        let fetcher = HttpFetcher::new("https://valenvrc.com/site").unwrap();
        assert_eq!(
            fetcher.resolve("data/products.json").unwrap().as_str(),
            "https://valenvrc.com/site/data/products.json"
        );
    }

    #[tokio::test]
    async fn test_fetch_reports_non_success_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/source.json");
            then.status(404);
        });

        let fetcher = HttpFetcher::new(&server.base_url()).unwrap();
        let err = fetcher.fetch("source.json").await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, SiteError::ResourceStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/data/site-config.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"commissions":{"services":["Udon Programming"]}}"#);
        });

        let fetcher = HttpFetcher::new(&server.base_url()).unwrap();
        let body = fetcher.fetch("data/site-config.json").await.unwrap();

        api_mock.assert();
        assert!(String::from_utf8(body).unwrap().contains("Udon Programming"));
    }
}
