pub mod dto;
pub mod helpers;
pub mod implementation;

pub use dto::{GraphqlError, GraphqlRequest, GraphqlResponse, MoneyV2, Shop, ShopDomain};
pub use helpers::{graphql_endpoint, ACCESS_TOKEN_HEADER};
pub use implementation::StorefrontClient;
