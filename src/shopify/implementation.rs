use super::dto::{GraphqlRequest, GraphqlResponse, Shop, ShopQuery};
use super::helpers::ACCESS_TOKEN_HEADER;
use crate::config::ShopifyConfig;
use crate::error::{Result, StorefrontError};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;

const SHOP_QUERY: &str = "query getShop { shop { name primaryDomain { url } } }";

#[derive(Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    endpoint: String,
}

impl StorefrontClient {
    pub fn new(config: &ShopifyConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut token = HeaderValue::from_str(&config.storefront_access_token)
            .map_err(|_| StorefrontError::config_error("Invalid SHOPIFY_STOREFRONT_ACCESS_TOKEN"))?;
        token.set_sensitive(true);
        headers.insert(ACCESS_TOKEN_HEADER, token);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent("Storefront/0.1.0")
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            endpoint: config.graphql_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn query<T>(&self, query: &str, variables: Option<serde_json::Value>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("Sending storefront query to {}", self.endpoint);
        let body = GraphqlRequest { query, variables };
        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(StorefrontError::NetworkError)?
            .error_for_status()
            .map_err(StorefrontError::NetworkError)?
            .json::<GraphqlResponse<T>>()
            .await
            .map_err(StorefrontError::NetworkError)?;

        if let Some(error) = response.errors.into_iter().next() {
            tracing::error!("Storefront API returned error: {}", error.message);
            return Err(StorefrontError::api_error(error.message));
        }
        response
            .data
            .ok_or_else(|| StorefrontError::api_error("Response contained no data"))
    }

    pub async fn get_shop(&self) -> Result<Shop> {
        let data: ShopQuery = self.query(SHOP_QUERY, None).await?;
        Ok(data.shop)
    }
}
