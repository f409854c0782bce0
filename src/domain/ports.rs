use crate::domain::model::ResourcePaths;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Fetches raw bytes for a resource path relative to some source base.
pub trait ResourceFetcher: Send + Sync {
    fn fetch(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_base(&self) -> &str;
    fn resource_paths(&self) -> ResourcePaths;
    fn default_listing_url(&self) -> &str;
    fn fallback_services(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn templates_dir(&self) -> Option<&Path>;
    /// `None` when no archive should be written.
    fn archive_name(&self) -> Option<&str>;
}

/// Outbound navigation surface (new browsing context, or a same-context hand-off
/// such as the `vcc://` scheme).
pub trait LinkOpener {
    fn open_new_context(&self, url: &str);
    fn navigate(&self, url: &str);
}

/// One page: fetch resources, bind them to a view, publish the view.
#[async_trait]
pub trait PageController: Send + Sync {
    type Model: Send + Sync;
    type View: Send;

    fn page_name(&self) -> &str;
    async fn load(&self) -> Result<Self::Model>;
    fn bind(&self, model: &Self::Model) -> Result<Self::View>;
    async fn publish(&self, view: Self::View) -> Result<Vec<String>>;
}
