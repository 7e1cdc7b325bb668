use crate::error::StorefrontError;
use crate::price::Price;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    pub amount: String,
    pub currency_code: String,
}

impl TryFrom<MoneyV2> for Price {
    type Error = StorefrontError;

    fn try_from(money: MoneyV2) -> Result<Self, Self::Error> {
        Price::parse(&money.amount, &money.currency_code)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub name: String,
    pub primary_domain: Option<ShopDomain>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopDomain {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShopQuery {
    pub shop: Shop,
}
