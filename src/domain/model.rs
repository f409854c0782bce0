use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resource locations, relative to the source base.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePaths {
    pub site_config: String,
    pub products: String,
    pub portfolio: String,
    pub listing: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            site_config: "data/site-config.json".to_string(),
            products: "data/products.json".to_string(),
            portfolio: "data/portfolio.json".to_string(),
            listing: "source.json".to_string(),
        }
    }
}

/// `source.json`: the package-listing manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawListingDocument {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: Vec<RawPackageRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPackageRecord {
    pub name: String,
    /// Download URLs, newest first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub releases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PackageVersion {
    Latest,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl PackageVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageVersion::Latest => "Latest",
            PackageVersion::NotAvailable => "N/A",
        }
    }
}

impl std::fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI-ready view of one manifest package. Immutable once normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPackage {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: PackageVersion,
    pub zip_url: Option<String>,
    pub author: Author,
    pub dependencies: Vec<String>,
    pub keywords: Vec<String>,
    pub license: String,
}

/// `data/site-config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub commissions: Commissions,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commissions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub vrchat: Option<String>,
}

/// `data/products.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub jinxxy_link: Option<String>,
    #[serde(default)]
    pub gumroad_link: Option<String>,
}

/// `data/portfolio.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub worked_for: Vec<Brand>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub personal_projects: Vec<PersonalProject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub others: Vec<OtherProject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub url: String,
    #[serde(default)]
    pub image: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalProject {
    pub url: String,
    #[serde(default)]
    pub image: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherProject {
    pub url: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_tolerates_missing_fields() {
        let listing: RawListingDocument = serde_json::from_str(
            r#"{"packages":[{"name":"com.acme.Foo"}]}"#,
        )
        .unwrap();
        assert!(listing.url.is_none());
        assert!(listing.author.is_none());
        assert_eq!(listing.packages[0].releases.len(), 0);
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let listing: RawListingDocument = serde_json::from_str(
            r#"{"packages":[{"name":"com.acme.Foo","releases":null},{"name":"com.acme.Ok","releases":["a.zip"]}]}"#,
        )
        .unwrap();
        assert_eq!(listing.packages.len(), 2);
        assert!(listing.packages[0].releases.is_empty());
        assert_eq!(listing.packages[1].releases, vec!["a.zip"]);

        let listing: RawListingDocument = serde_json::from_str(r#"{"packages":null}"#).unwrap();
        assert!(listing.packages.is_empty());
    }

    #[test]
    fn test_null_site_config_sections_use_defaults() {
        let config: SiteConfig = serde_json::from_str(
            r#"{"commissions":null,"social":{"discord":"https://discord.gg/x"}}"#,
        )
        .unwrap();
        assert!(config.commissions.services.is_empty());
        assert_eq!(config.social.discord.as_deref(), Some("https://discord.gg/x"));

        let config: SiteConfig =
            serde_json::from_str(r#"{"commissions":{"services":null},"social":null}"#).unwrap();
        assert_eq!(config, SiteConfig::default());

        let products: ProductsDocument = serde_json::from_str(r#"{"products":null}"#).unwrap();
        assert!(products.products.is_empty());
    }

    #[test]
    fn test_product_store_links_use_camel_case() {
        let product: Product = serde_json::from_str(
            r#"{"id":"p1","name":"Mirror","jinxxyLink":"https://jinxxy.com/x"}"#,
        )
        .unwrap();
        assert_eq!(product.jinxxy_link.as_deref(), Some("https://jinxxy.com/x"));
        assert!(product.gumroad_link.is_none());
        assert!(product.features.is_none());
    }

    #[test]
    fn test_display_package_serializes_version_label() {
        let json = serde_json::to_value(PackageVersion::NotAvailable).unwrap();
        assert_eq!(json, serde_json::json!("N/A"));
        assert_eq!(PackageVersion::Latest.to_string(), "Latest");
    }
}
