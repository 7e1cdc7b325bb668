use crate::utils::ensure_starts_with;

pub const ACCESS_TOKEN_HEADER: &str = "x-shopify-storefront-access-token";

pub fn graphql_endpoint(domain: &str, api_version: &str) -> String {
    let base = ensure_starts_with(domain, "https://");
    format!("{}/api/{}/graphql.json", base.trim_end_matches('/'), api_version)
}
