use crate::core::gallery::Gallery;
use crate::core::loader::{DataLoader, SiteData};
use crate::core::normalize::normalize;
use crate::core::publish::{write_files, SiteFile};
use crate::core::render::{load_shell, PageDocument, Renderer, STORE_SHELL};
use crate::core::view::{PackageDetail, ProductShowcase};
use crate::core::{ConfigProvider, PageController, ResourceFetcher, Storage};
use crate::utils::error::Result;
use serde_json::json;

pub const STORE_PAGE: &str = "index.html";
pub const PACKAGES_EXPORT: &str = "data/packages.json";

/// Everything the store page knows after loading. Built once, read-only.
#[derive(Debug, Clone)]
pub struct StoreModel {
    pub site: SiteData,
    pub gallery: Gallery,
}

pub struct StorePage<F: ResourceFetcher, S: Storage> {
    loader: DataLoader<F>,
    storage: S,
    renderer: Renderer,
    shell: String,
    fallback_services: Vec<String>,
    default_listing_url: String,
}

impl<F: ResourceFetcher, S: Storage> StorePage<F, S> {
    pub fn new<C: ConfigProvider>(fetcher: F, storage: S, config: &C) -> Result<Self> {
        Ok(Self {
            loader: DataLoader::new(fetcher, config.resource_paths()),
            storage,
            renderer: Renderer::new()?,
            shell: load_shell(config.templates_dir(), STORE_PAGE, STORE_SHELL)?,
            fallback_services: config.fallback_services().to_vec(),
            default_listing_url: config.default_listing_url().to_string(),
        })
    }

    /// Package gallery only. A manifest failure is terminal for the gallery:
    /// it comes back empty and the error is logged.
    pub async fn load_gallery(&self) -> Gallery {
        match self.loader.load_listing().await {
            Ok(listing) => {
                let listing_url = listing
                    .url
                    .clone()
                    .filter(|url| !url.trim().is_empty())
                    .unwrap_or_else(|| self.default_listing_url.clone());
                Gallery::new(normalize(&listing), listing_url)
            }
            Err(e) => {
                tracing::error!("Could not load VPM data: {}", e);
                Gallery::empty(self.default_listing_url.clone())
            }
        }
    }

    fn render_page(&self, model: &StoreModel) -> Result<PageDocument> {
        let mut page = PageDocument::new(STORE_PAGE, self.shell.clone());
        let showcase = ProductShowcase::new(&model.site.products);

        if !showcase.is_empty() {
            page.fill("productThumbnails", || {
                self.renderer.render(
                    "product_thumbnails.html",
                    json!({ "thumbnails": showcase.thumbnails }),
                )
            })?;
            if let Some(details) = &showcase.details {
                page.fill("productDetails", || {
                    self.renderer
                        .render("product_details.html", json!({ "details": details }))
                })?;
            }
        }

        page.fill("servicesGrid", || {
            self.renderer.render(
                "services.html",
                json!({ "services": model.site.config.commissions.services }),
            )
        })?;

        let gallery = &model.gallery;
        page.fill("vpmRepoActions", || {
            self.renderer.render(
                "repo_actions.html",
                json!({
                    "listing_url": gallery.listing_url(),
                    "add_repo_url": gallery.add_repo_url(),
                }),
            )
        })?;
        page.fill("vpmPackagesGrid", || {
            self.renderer
                .render("package_cards.html", json!({ "cards": gallery.cards() }))
        })?;
        page.fill("vpmPackageModalContent", || {
            let details: Vec<PackageDetail> =
                gallery.packages().iter().map(PackageDetail::from).collect();
            self.renderer
                .render("package_details.html", json!({ "details": details }))
        })?;

        tracing::info!("Rendered {} packages", gallery.len());
        Ok(page)
    }
}

#[async_trait::async_trait]
impl<F: ResourceFetcher, S: Storage> PageController for StorePage<F, S> {
    type Model = StoreModel;
    type View = Vec<SiteFile>;

    fn page_name(&self) -> &str {
        STORE_PAGE
    }

    async fn load(&self) -> Result<StoreModel> {
        let (site, gallery) = tokio::join!(
            self.loader.load_site_data(&self.fallback_services),
            self.load_gallery()
        );
        Ok(StoreModel { site, gallery })
    }

    fn bind(&self, model: &StoreModel) -> Result<Vec<SiteFile>> {
        let page = self.render_page(model)?;
        let packages = serde_json::to_vec_pretty(model.gallery.packages())?;

        Ok(vec![
            SiteFile::new(STORE_PAGE, page.into_html()),
            SiteFile::new(PACKAGES_EXPORT, packages),
        ])
    }

    async fn publish(&self, view: Vec<SiteFile>) -> Result<Vec<String>> {
        write_files(&self.storage, &view).await
    }
}
