// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod local;
pub mod source;

pub use http::HttpFetcher;
pub use local::{LocalFetcher, LocalStorage};
pub use source::SourceFetcher;
