pub mod portfolio_page;
pub mod store_page;

pub use portfolio_page::{PortfolioModel, PortfolioPage};
pub use store_page::{StoreModel, StorePage};
