use crate::error::{Result, StorefrontError};
use crate::shopify::helpers::graphql_endpoint;
use crate::utils::{self, SHOPIFY_STOREFRONT_ACCESS_TOKEN, SHOPIFY_STORE_DOMAIN};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_VERSION: &str = "2023-01";

const OPTIONAL_ENVIRONMENT_VARIABLES: [&str; 5] = [
    "SHOPIFY_API_VERSION",
    "SHOPIFY_REQUEST_TIMEOUT_SECS",
    "SHOPIFY_REVALIDATION_SECRET",
    "SITE_NAME",
    "COMPANY_NAME",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub shopify: ShopifyConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopifyConfig {
    #[serde(default)]
    pub store_domain: String,
    #[serde(default)]
    pub storefront_access_token: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub revalidation_secret: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site_name: Option<String>,
    pub company_name: Option<String>,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            store_domain: String::new(),
            storefront_access_token: String::new(),
            api_version: default_api_version(),
            request_timeout_secs: default_request_timeout_secs(),
            revalidation_secret: None,
        }
    }
}

impl ShopifyConfig {
    /// Full Storefront GraphQL endpoint, always on `https://`.
    pub fn graphql_endpoint(&self) -> String {
        graphql_endpoint(&self.store_domain, &self.api_version)
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self> {
        utils::ensure_unicode_env(&utils::REQUIRED_ENVIRONMENT_VARIABLES)?;
        utils::ensure_unicode_env(&OPTIONAL_ENVIRONMENT_VARIABLES)?;
        Self::from_lookup(|name| utils::env_var(name).ok().flatten())
    }

    /// Builds the config from `lookup`, failing fast on missing or
    /// placeholder values for the required variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        utils::validate_with(&lookup)?;

        // Empty optional values behave as unset.
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        config.shopify.store_domain = lookup(SHOPIFY_STORE_DOMAIN).unwrap_or_default();
        config.shopify.storefront_access_token =
            lookup(SHOPIFY_STOREFRONT_ACCESS_TOKEN).unwrap_or_default();

        if let Some(version) = optional("SHOPIFY_API_VERSION") {
            config.shopify.api_version = version;
        }
        if let Some(timeout) = optional("SHOPIFY_REQUEST_TIMEOUT_SECS") {
            config.shopify.request_timeout_secs = timeout
                .trim()
                .parse()
                .map_err(|_| StorefrontError::config_error("Invalid SHOPIFY_REQUEST_TIMEOUT_SECS"))?;
        }
        config.shopify.revalidation_secret = optional("SHOPIFY_REVALIDATION_SECRET");
        config.site.site_name = optional("SITE_NAME");
        config.site.company_name = optional("COMPANY_NAME");

        tracing::info!(
            "Configuration loaded: store_domain={}, api_version={}",
            config.shopify.store_domain,
            config.shopify.api_version
        );
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StorefrontError::config_error(format!("Failed to read config file: {}", e))
        })?;

        let config: StorefrontConfig = toml::from_str(&content).map_err(|e| {
            StorefrontError::config_error(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies the environment rules to the required fields of an already
    /// populated config.
    pub fn validate(&self) -> Result<()> {
        utils::validate_with(|name| match name {
            SHOPIFY_STORE_DOMAIN => Some(self.shopify.store_domain.clone()),
            SHOPIFY_STOREFRONT_ACCESS_TOKEN => Some(self.shopify.storefront_access_token.clone()),
            _ => None,
        })
    }
}
