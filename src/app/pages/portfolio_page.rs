use crate::core::loader::DataLoader;
use crate::core::publish::{write_files, SiteFile};
use crate::core::render::{load_shell, PageDocument, Renderer, PORTFOLIO_SHELL};
use crate::core::view::PortfolioView;
use crate::core::{ConfigProvider, PageController, ResourceFetcher, Storage};
use crate::domain::model::{PortfolioData, SiteConfig};
use crate::utils::error::Result;
use serde_json::json;

pub const PORTFOLIO_PAGE: &str = "portfolio.html";

/// `None` when the portfolio resources failed to load; the page is then
/// written without any of its sections.
#[derive(Debug, Clone, Default)]
pub struct PortfolioModel {
    pub data: Option<(PortfolioData, SiteConfig)>,
}

pub struct PortfolioPage<F: ResourceFetcher, S: Storage> {
    loader: DataLoader<F>,
    storage: S,
    renderer: Renderer,
    shell: String,
}

impl<F: ResourceFetcher, S: Storage> PortfolioPage<F, S> {
    pub fn new<C: ConfigProvider>(fetcher: F, storage: S, config: &C) -> Result<Self> {
        Ok(Self {
            loader: DataLoader::new(fetcher, config.resource_paths()),
            storage,
            renderer: Renderer::new()?,
            shell: load_shell(config.templates_dir(), PORTFOLIO_PAGE, PORTFOLIO_SHELL)?,
        })
    }

    fn render_page(&self, view: &PortfolioView) -> Result<PageDocument> {
        let mut page = PageDocument::new(PORTFOLIO_PAGE, self.shell.clone());

        page.fill("worked-for-content", || {
            self.renderer
                .render("worked_for.html", json!({ "brands": view.worked_for }))
        })?;
        page.fill("personal-projects-grid", || {
            self.renderer.render(
                "personal_projects.html",
                json!({ "projects": view.personal_projects }),
            )
        })?;
        page.fill("others-grid", || {
            self.renderer
                .render("others.html", json!({ "projects": view.others }))
        })?;
        page.fill("reviews-carousel", || {
            self.renderer
                .render("reviews.html", json!({ "reviews": view.reviews }))
        })?;
        page.fill("footer-social-links", || {
            self.renderer
                .render("social_links.html", json!({ "links": view.social }))
        })?;

        Ok(page)
    }
}

#[async_trait::async_trait]
impl<F: ResourceFetcher, S: Storage> PageController for PortfolioPage<F, S> {
    type Model = PortfolioModel;
    type View = Vec<SiteFile>;

    fn page_name(&self) -> &str {
        PORTFOLIO_PAGE
    }

    async fn load(&self) -> Result<PortfolioModel> {
        match self.loader.load_portfolio().await {
            Ok(data) => Ok(PortfolioModel { data: Some(data) }),
            Err(e) => {
                tracing::error!("Error loading portfolio data: {}", e);
                Ok(PortfolioModel::default())
            }
        }
    }

    fn bind(&self, model: &PortfolioModel) -> Result<Vec<SiteFile>> {
        let html = match &model.data {
            Some((portfolio, config)) => {
                let view = PortfolioView::new(portfolio, &config.social);
                tracing::info!(
                    "Rendered {} brands, {} personal projects, {} reviews",
                    view.worked_for.len(),
                    view.personal_projects.len(),
                    view.reviews.len()
                );
                self.render_page(&view)?.into_html()
            }
            None => self.shell.clone(),
        };

        Ok(vec![SiteFile::new(PORTFOLIO_PAGE, html)])
    }

    async fn publish(&self, view: Vec<SiteFile>) -> Result<Vec<String>> {
        write_files(&self.storage, &view).await
    }
}
