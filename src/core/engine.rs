use crate::core::PageController;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct PageReport {
    pub page: String,
    pub files: Vec<String>,
}

pub struct SiteEngine<P: PageController> {
    page: P,
}

impl<P: PageController> SiteEngine<P> {
    pub fn new(page: P) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub async fn run(&self) -> Result<PageReport> {
        let name = self.page.page_name().to_string();
        tracing::info!("Building page '{}'", name);

        tracing::debug!("Loading resources for '{}'", name);
        let model = self.page.load().await?;

        tracing::debug!("Binding view for '{}'", name);
        let view = self.page.bind(&model)?;

        let files = self.page.publish(view).await?;
        tracing::info!("Page '{}' written ({} files)", name, files.len());

        Ok(PageReport { page: name, files })
    }
}
