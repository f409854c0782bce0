use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

/// One generated output file, path relative to the output root.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteFile {
    pub path: String,
    pub contents: Vec<u8>,
}

impl SiteFile {
    pub fn new(path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

pub async fn write_files<S: Storage>(storage: &S, files: &[SiteFile]) -> Result<Vec<String>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        tracing::debug!("Writing {} ({} bytes)", file.path, file.contents.len());
        storage.write_file(&file.path, &file.contents).await?;
        written.push(file.path.clone());
    }
    Ok(written)
}

/// Reads back already-written files and bundles them into one zip archive.
pub async fn archive_files<S: Storage>(
    storage: &S,
    paths: &[String],
    archive_name: &str,
) -> Result<String> {
    tracing::debug!("Creating {} with {} files", archive_name, paths.len());

    let mut contents = Vec::with_capacity(paths.len());
    for path in paths {
        contents.push((path, storage.read_file(path).await?));
    }

    let zip_data = {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for (path, data) in contents {
            zip.start_file::<_, ()>(path.as_str(), FileOptions::default())?;
            zip.write_all(&data)?;
        }
        let cursor = zip.finish()?;
        cursor.into_inner()
    };

    tracing::debug!("Writing archive ({} bytes) to storage", zip_data.len());
    storage.write_file(archive_name, &zip_data).await?;
    Ok(archive_name.to_string())
}
