//! View models: pure projections of the loaded models, independent of how
//! they end up in HTML.

use crate::domain::model::{
    Brand, DisplayPackage, OtherProject, PersonalProject, PortfolioData, Product, Review,
    SocialLinks,
};
use crate::utils::error::{Result, SiteError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageCard {
    pub id: String,
    pub kind: String,
    pub version: String,
    pub display_name: String,
    pub description: String,
    pub downloadable: bool,
}

impl From<&DisplayPackage> for PackageCard {
    fn from(package: &DisplayPackage) -> Self {
        Self {
            id: package.id.clone(),
            kind: package.kind.clone(),
            version: package.version.to_string(),
            display_name: package.display_name.clone(),
            description: package.description.clone(),
            downloadable: package.zip_url.is_some(),
        }
    }
}

/// The "Info" modal. `None` groups are hidden, not rendered empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageDetail {
    pub display_name: String,
    pub id: String,
    pub version: String,
    pub description: String,
    pub author_name: String,
    pub author_url: String,
    pub dependencies: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub license: Option<String>,
}

impl From<&DisplayPackage> for PackageDetail {
    fn from(package: &DisplayPackage) -> Self {
        Self {
            display_name: package.display_name.clone(),
            id: package.id.clone(),
            version: package.version.to_string(),
            description: package.description.clone(),
            author_name: package
                .author
                .name
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            author_url: package.author.url.clone().unwrap_or_else(|| "#".to_string()),
            dependencies: non_empty(&package.dependencies),
            keywords: non_empty(&package.keywords),
            license: (!package.license.is_empty()).then(|| package.license.clone()),
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductThumbnail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreLink {
    pub store: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Option<Vec<String>>,
    pub store_links: Vec<StoreLink>,
}

impl From<&Product> for ProductDetails {
    fn from(product: &Product) -> Self {
        let mut store_links = Vec::new();
        if let Some(url) = &product.jinxxy_link {
            store_links.push(StoreLink {
                store: "jinxxy",
                label: "Get on Jinxxy",
                icon: "assets/JinxxyIcon.webp",
                url: url.clone(),
            });
        }
        if let Some(url) = &product.gumroad_link {
            store_links.push(StoreLink {
                store: "gumroad",
                label: "Get on Gumroad",
                icon: "assets/Gumroad_Icon.webp",
                url: url.clone(),
            });
        }

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            features: product.features.clone(),
            store_links,
        }
    }
}

/// Thumbnail picker with one active product. The first product starts selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductShowcase {
    pub thumbnails: Vec<ProductThumbnail>,
    pub details: Option<ProductDetails>,
    #[serde(skip)]
    products: Vec<Product>,
}

impl ProductShowcase {
    pub fn new(products: &[Product]) -> Self {
        let mut showcase = Self {
            thumbnails: products
                .iter()
                .map(|p| ProductThumbnail {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    thumbnail: p.thumbnail.clone(),
                    active: false,
                })
                .collect(),
            details: None,
            products: products.to_vec(),
        };
        if let Some(first) = products.first() {
            showcase.activate(&first.id);
        }
        showcase
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn select(&mut self, product_id: &str) -> Result<&ProductDetails> {
        if !self.activate(product_id) {
            return Err(SiteError::MissingData {
                message: format!("Product {} not found", product_id),
            });
        }
        self.details.as_ref().ok_or_else(|| SiteError::MissingData {
            message: format!("Product {} not found", product_id),
        })
    }

    fn activate(&mut self, product_id: &str) -> bool {
        let Some(product) = self.products.iter().find(|p| p.id == product_id) else {
            return false;
        };
        for thumbnail in &mut self.thumbnails {
            thumbnail.active = thumbnail.id == product_id;
        }
        self.details = Some(ProductDetails::from(product));
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: String,
}

/// Footer links in fixed order; absent networks are skipped.
pub fn social_links(social: &SocialLinks) -> Vec<SocialLink> {
    [
        ("Discord", &social.discord),
        ("Twitter", &social.twitter),
        ("VRChat", &social.vrchat),
    ]
    .into_iter()
    .filter_map(|(label, url)| {
        url.as_ref()
            .filter(|u| !u.is_empty())
            .map(|u| SocialLink {
                label,
                url: u.clone(),
            })
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandView {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub carousel_id: String,
    pub projects: Vec<crate::domain::model::Project>,
}

impl From<&Brand> for BrandView {
    fn from(brand: &Brand) -> Self {
        Self {
            id: brand.id.clone(),
            name: brand.name.clone(),
            logo: brand.logo.clone(),
            carousel_id: format!("carousel-{}", brand.id),
            projects: brand.projects.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioView {
    pub worked_for: Vec<BrandView>,
    pub personal_projects: Vec<PersonalProject>,
    pub others: Vec<OtherProject>,
    pub reviews: Vec<Review>,
    pub social: Vec<SocialLink>,
}

impl PortfolioView {
    pub fn new(portfolio: &PortfolioData, social: &SocialLinks) -> Self {
        Self {
            worked_for: portfolio.worked_for.iter().map(BrandView::from).collect(),
            personal_projects: portfolio.personal_projects.clone(),
            others: portfolio.others.clone(),
            reviews: portfolio.reviews.clone(),
            social: social_links(social),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Author, PackageVersion};

    fn product(id: &str, jinxxy: Option<&str>, gumroad: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: "desc".to_string(),
            thumbnail: format!("img/{}.webp", id),
            features: None,
            jinxxy_link: jinxxy.map(str::to_string),
            gumroad_link: gumroad.map(str::to_string),
        }
    }

    fn package() -> DisplayPackage {
        DisplayPackage {
            id: "com.acme.Foo".to_string(),
            name: "com.acme.Foo".to_string(),
            display_name: "Foo".to_string(),
            description: "VRChat package: com.acme.Foo".to_string(),
            kind: "Tool".to_string(),
            version: PackageVersion::Latest,
            zip_url: Some("http://x/1.zip".to_string()),
            author: Author::default(),
            dependencies: vec![],
            keywords: vec![],
            license: String::new(),
        }
    }

    #[test]
    fn test_detail_hides_empty_groups_and_defaults_author() {
        let detail = PackageDetail::from(&package());
        assert_eq!(detail.author_name, "Unknown");
        assert_eq!(detail.author_url, "#");
        assert!(detail.dependencies.is_none());
        assert!(detail.keywords.is_none());
        assert!(detail.license.is_none());
    }

    #[test]
    fn test_detail_shows_present_groups() {
        let mut pkg = package();
        pkg.keywords = vec!["world".to_string()];
        pkg.license = "MIT".to_string();
        let detail = PackageDetail::from(&pkg);
        assert_eq!(detail.keywords, Some(vec!["world".to_string()]));
        assert_eq!(detail.license.as_deref(), Some("MIT"));
        assert!(detail.dependencies.is_none());
    }

    #[test]
    fn test_showcase_selects_first_product() {
        let showcase = ProductShowcase::new(&[
            product("a", Some("https://jinxxy.com/a"), None),
            product("b", None, Some("https://gumroad.com/b")),
        ]);

        assert!(showcase.thumbnails[0].active);
        assert!(!showcase.thumbnails[1].active);
        let details = showcase.details.as_ref().unwrap();
        assert_eq!(details.id, "a");
        assert_eq!(details.store_links.len(), 1);
        assert_eq!(details.store_links[0].store, "jinxxy");
    }

    #[test]
    fn test_showcase_select_switches_active() {
        let mut showcase = ProductShowcase::new(&[
            product("a", None, None),
            product("b", Some("https://jinxxy.com/b"), Some("https://gumroad.com/b")),
        ]);

        let details = showcase.select("b").unwrap();
        assert_eq!(details.store_links.len(), 2);
        assert!(!showcase.thumbnails[0].active);
        assert!(showcase.thumbnails[1].active);

        assert!(showcase.select("missing").is_err());
        // a failed selection leaves the current one alone
        assert_eq!(showcase.details.as_ref().unwrap().id, "b");
    }

    #[test]
    fn test_empty_showcase() {
        let showcase = ProductShowcase::new(&[]);
        assert!(showcase.is_empty());
        assert!(showcase.details.is_none());
    }

    #[test]
    fn test_social_links_order_and_skip() {
        let links = social_links(&SocialLinks {
            discord: Some("https://discord.gg/x".to_string()),
            twitter: None,
            vrchat: Some("https://vrchat.com/home/user/x".to_string()),
        });
        let labels: Vec<&str> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Discord", "VRChat"]);
    }

    #[test]
    fn test_brand_view_carousel_id() {
        let brand: Brand = serde_json::from_value(serde_json::json!({
            "id": "acme", "name": "Acme", "logo": "acme.png",
            "projects": [{"url": "https://x", "image": "p.png", "name": "World"}]
        }))
        .unwrap();
        let view = BrandView::from(&brand);
        assert_eq!(view.carousel_id, "carousel-acme");
        assert_eq!(view.projects.len(), 1);
    }
}
