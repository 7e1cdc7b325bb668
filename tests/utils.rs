use std::collections::HashMap;
use storefront::utils::{validate_with, SHOPIFY_STOREFRONT_ACCESS_TOKEN, SHOPIFY_STORE_DOMAIN};
use storefront::{create_url, ensure_starts_with, QueryParams, StorefrontError};

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn creates_url_with_query_parameters() {
    let mut params = QueryParams::new();
    params.set("color", "red");
    params.set("size", "large");
    assert_eq!(create_url("/products", &params), "/products?color=red&size=large");
}

#[test]
fn creates_url_without_query_parameters() {
    assert_eq!(create_url("/products", &QueryParams::new()), "/products");
}

#[test]
fn handles_single_query_parameter() {
    let mut params = QueryParams::new();
    params.set("search", "shoes");
    assert_eq!(create_url("/search", &params), "/search?search=shoes");
}

#[test]
fn handles_special_characters_in_parameters() {
    let mut params = QueryParams::new();
    params.set("query", "men's shoes");
    assert_eq!(create_url("/search", &params), "/search?query=men%27s+shoes");
}

#[test]
fn path_is_not_normalized() {
    let mut params = QueryParams::new();
    params.set("q", "x");
    assert_eq!(create_url("search/", &params), "search/?q=x");
}

#[test]
fn ensure_starts_with_adds_missing_prefix() {
    assert_eq!(ensure_starts_with("example.com", "https://"), "https://example.com");
    assert_eq!(ensure_starts_with("products", "/"), "/products");
}

#[test]
fn ensure_starts_with_keeps_existing_prefix() {
    assert_eq!(
        ensure_starts_with("https://example.com", "https://"),
        "https://example.com"
    );
    assert_eq!(ensure_starts_with("/products", "/"), "/products");
    assert_eq!(ensure_starts_with("", "/"), "/");
}

#[test]
fn passes_when_all_variables_present() {
    let lookup = env(&[
        (SHOPIFY_STORE_DOMAIN, "test-store.myshopify.com"),
        (SHOPIFY_STOREFRONT_ACCESS_TOKEN, "test-token"),
    ]);
    assert!(validate_with(lookup).is_ok());
}

#[test]
fn fails_when_store_domain_missing() {
    let err = validate_with(env(&[(SHOPIFY_STOREFRONT_ACCESS_TOKEN, "test-token")])).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("The following environment variables are missing"));
    assert!(message.contains(SHOPIFY_STORE_DOMAIN));
    assert!(!message.contains(SHOPIFY_STOREFRONT_ACCESS_TOKEN));
}

#[test]
fn fails_when_access_token_missing() {
    let err = validate_with(env(&[(SHOPIFY_STORE_DOMAIN, "test-store.myshopify.com")])).unwrap_err();
    assert!(err
        .to_string()
        .contains("The following environment variables are missing"));
    assert!(err.to_string().contains(SHOPIFY_STOREFRONT_ACCESS_TOKEN));
}

#[test]
fn lists_every_missing_variable() {
    match validate_with(env(&[])).unwrap_err() {
        StorefrontError::MissingEnvironmentVariables { names } => {
            assert_eq!(names, vec![SHOPIFY_STORE_DOMAIN, SHOPIFY_STOREFRONT_ACCESS_TOKEN]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fails_when_store_domain_has_brackets() {
    for domain in ["[test-store].myshopify.com", "test-store].myshopify.com"] {
        let err = validate_with(env(&[
            (SHOPIFY_STORE_DOMAIN, domain),
            (SHOPIFY_STOREFRONT_ACCESS_TOKEN, "test-token"),
        ]))
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("Your `SHOPIFY_STORE_DOMAIN` environment variable includes brackets"));
    }
}

#[test]
fn bracket_error_names_the_access_token() {
    let err = validate_with(env(&[(SHOPIFY_STOREFRONT_ACCESS_TOKEN, "[token]")])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Your `SHOPIFY_STOREFRONT_ACCESS_TOKEN` environment variable includes brackets (ie. `[` and `]`). Your site will not work with them there. Please remove them."
    );
}
