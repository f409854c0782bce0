use crate::core::view::{PackageCard, PackageDetail};
use crate::domain::model::DisplayPackage;
use crate::domain::ports::LinkOpener;
use crate::utils::error::{Result, SiteError};
use std::collections::HashMap;

/// Visibility of one rendered card for the current search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardVisibility {
    pub id: String,
    pub visible: bool,
}

/// Normalized packages plus an id index. Built once per load, read-only after.
#[derive(Debug, Clone)]
pub struct Gallery {
    packages: Vec<DisplayPackage>,
    index: HashMap<String, usize>,
    listing_url: String,
}

impl Gallery {
    pub fn new(packages: Vec<DisplayPackage>, listing_url: impl Into<String>) -> Self {
        let mut index = HashMap::with_capacity(packages.len());
        for (position, package) in packages.iter().enumerate() {
            if index.contains_key(&package.id) {
                tracing::warn!(
                    "Duplicate package id {} at position {}; lookups resolve to the first entry",
                    package.id,
                    position
                );
                continue;
            }
            index.insert(package.id.clone(), position);
        }

        Self {
            packages,
            index,
            listing_url: listing_url.into(),
        }
    }

    pub fn empty(listing_url: impl Into<String>) -> Self {
        Self::new(Vec::new(), listing_url)
    }

    pub fn packages(&self) -> &[DisplayPackage] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    pub fn find(&self, id: &str) -> Option<&DisplayPackage> {
        self.index.get(id).map(|&position| &self.packages[position])
    }

    pub fn cards(&self) -> Vec<PackageCard> {
        self.packages.iter().map(PackageCard::from).collect()
    }

    /// One decision per package, in render order.
    pub fn filter(&self, query: &str) -> Vec<CardVisibility> {
        let query = query.to_lowercase();
        self.packages
            .iter()
            .map(|package| CardVisibility {
                id: package.id.clone(),
                visible: matches(package, &query),
            })
            .collect()
    }

    pub fn visible(&self, query: &str) -> Vec<&DisplayPackage> {
        let query = query.to_lowercase();
        self.packages
            .iter()
            .filter(|package| matches(package, &query))
            .collect()
    }

    pub fn detail(&self, id: &str) -> Result<PackageDetail> {
        match self.find(id) {
            Some(package) => Ok(PackageDetail::from(package)),
            None => {
                tracing::error!("Package {} not found", id);
                Err(SiteError::MissingData {
                    message: format!("Package {} not found", id),
                })
            }
        }
    }

    /// Opens the package's latest release. Does nothing when the package or
    /// its download URL is missing.
    pub fn download(&self, id: &str, opener: &dyn LinkOpener) -> Result<()> {
        match self.find(id).and_then(|package| package.zip_url.as_deref()) {
            Some(url) => {
                tracing::debug!("Opening download for {}: {}", id, url);
                opener.open_new_context(url);
                Ok(())
            }
            None => {
                tracing::error!("No download URL for package {}", id);
                Err(SiteError::MissingData {
                    message: format!("No download URL for package {}", id),
                })
            }
        }
    }

    pub fn add_repo_url(&self) -> String {
        add_repo_url(&self.listing_url)
    }

    /// Hands the listing over to the VRChat Creator Companion.
    pub fn add_repo(&self, opener: &dyn LinkOpener) {
        opener.navigate(&self.add_repo_url());
    }
}

/// `query` must already be lowercase.
pub fn matches(package: &DisplayPackage, query: &str) -> bool {
    package.id.to_lowercase().contains(query)
        || package.display_name.to_lowercase().contains(query)
        || (!package.description.is_empty() && package.description.to_lowercase().contains(query))
}

pub fn add_repo_url(listing_url: &str) -> String {
    format!("vcc://vpm/addRepo?url={}", urlencoding::encode(listing_url))
}
