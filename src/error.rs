use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorefrontError>;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error(
        "The following environment variables are missing. Your site will not work without them. Read more: https://vercel.com/docs/integrations/shopify#configure-environment-variables\n\n{}\n",
        .names.join("\n")
    )]
    MissingEnvironmentVariables { names: Vec<String> },

    #[error(
        "Your `{name}` environment variable includes brackets (ie. `[` and `]`). Your site will not work with them there. Please remove them."
    )]
    BracketedEnvironmentVariable { name: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: String },

    #[error("Invalid currency code: {code}")]
    InvalidCurrencyCode { code: String },

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl StorefrontError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        StorefrontError::ApiError(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        StorefrontError::ConfigError(msg.into())
    }
}
