pub mod engine;
pub mod gallery;
pub mod interaction;
pub mod loader;
pub mod normalize;
pub mod publish;
pub mod render;
pub mod view;

pub use crate::domain::model::{DisplayPackage, RawListingDocument};
pub use crate::domain::ports::{ConfigProvider, LinkOpener, PageController, ResourceFetcher, Storage};
pub use crate::utils::error::Result;
