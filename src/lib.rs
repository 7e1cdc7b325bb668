pub mod config;
pub mod error;
pub mod price;
pub mod query;
pub mod shopify;
pub mod utils;

pub use config::{ShopifyConfig, SiteConfig, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use price::{format_price, CurrencyCode, Price};
pub use query::QueryParams;
pub use shopify::StorefrontClient;
pub use utils::{create_url, ensure_starts_with, validate_environment_variables};
