use crate::error::{Result, StorefrontError};
use crate::query::QueryParams;
use std::env::VarError;

pub const SHOPIFY_STORE_DOMAIN: &str = "SHOPIFY_STORE_DOMAIN";
pub const SHOPIFY_STOREFRONT_ACCESS_TOKEN: &str = "SHOPIFY_STOREFRONT_ACCESS_TOKEN";

/// Variables the storefront cannot start without, in reporting order.
pub const REQUIRED_ENVIRONMENT_VARIABLES: [&str; 2] =
    [SHOPIFY_STORE_DOMAIN, SHOPIFY_STOREFRONT_ACCESS_TOKEN];

/// Joins `pathname` with the form-urlencoded `params`.
///
/// The `?` is only added when there is at least one parameter.
pub fn create_url(pathname: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        return pathname.to_string();
    }
    format!("{}?{}", pathname, params.to_query_string())
}

pub fn ensure_starts_with(string: &str, prefix: &str) -> String {
    if string.starts_with(prefix) {
        string.to_string()
    } else {
        format!("{}{}", prefix, string)
    }
}

/// Checks the required variables against the process environment.
pub fn validate_environment_variables() -> Result<()> {
    ensure_unicode_env(&REQUIRED_ENVIRONMENT_VARIABLES)?;
    validate_with(|name| env_var(name).ok().flatten())
}

/// Reads `name` from the process environment.
///
/// A value that is set but not valid Unicode is a config error, not a
/// missing variable.
pub fn env_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => {
            tracing::warn!("{} is not valid unicode", name);
            Err(StorefrontError::config_error(format!(
                "{} is not valid unicode",
                name
            )))
        }
    }
}

pub(crate) fn ensure_unicode_env(names: &[&str]) -> Result<()> {
    for name in names {
        env_var(name)?;
    }
    Ok(())
}

/// Checks the required variables against `lookup`.
///
/// Empty values count as missing. A value holding `[` or `]` is an
/// unsubstituted placeholder and fails before missing keys are reported.
pub fn validate_with<F>(lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let mut missing = Vec::new();

    for name in REQUIRED_ENVIRONMENT_VARIABLES {
        match lookup(name).filter(|value| !value.is_empty()) {
            Some(value) if value.contains(['[', ']']) => {
                tracing::warn!("{} contains bracket placeholder", name);
                return Err(StorefrontError::BracketedEnvironmentVariable {
                    name: name.to_string(),
                });
            }
            Some(_) => {}
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        tracing::warn!("Missing environment variables: {}", missing.join(", "));
        return Err(StorefrontError::MissingEnvironmentVariables { names: missing });
    }

    Ok(())
}
