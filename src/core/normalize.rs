//! Raw listing manifest → flat list of [`DisplayPackage`]s.

use crate::domain::model::{
    Author, DisplayPackage, PackageVersion, RawListingDocument, RawPackageRecord,
};

pub const PACKAGE_KIND: &str = "Tool";

/// Normalizes every package record, preserving input order. Duplicate names are
/// kept as separate entries.
pub fn normalize(listing: &RawListingDocument) -> Vec<DisplayPackage> {
    let author = listing.author.clone().unwrap_or_default();
    listing
        .packages
        .iter()
        .map(|record| normalize_record(record, &author))
        .collect()
}

fn normalize_record(record: &RawPackageRecord, author: &Author) -> DisplayPackage {
    // Only the first release (newest) is ever offered for download.
    let latest_release = record.releases.first().cloned();

    DisplayPackage {
        id: record.name.clone(),
        name: record.name.clone(),
        display_name: display_name(&record.name),
        description: format!("VRChat package: {}", record.name),
        kind: PACKAGE_KIND.to_string(),
        version: if latest_release.is_some() {
            PackageVersion::Latest
        } else {
            PackageVersion::NotAvailable
        },
        zip_url: latest_release,
        author: author.clone(),
        dependencies: Vec::new(),
        keywords: Vec::new(),
        license: String::new(),
    }
}

/// `com.example.WorldSetupTools` → `World Setup Tools`.
pub fn display_name(name: &str) -> String {
    let segment = name.rsplit('.').next().unwrap_or(name);

    let mut spaced = String::with_capacity(segment.len() + 8);
    for c in segment.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    spaced.trim().to_string()
}
