use std::net::SocketAddr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SCRIPTURE_API_URL: &str = "https://api.scripture.api.bible/v1";
const DEFAULT_ESV_API_URL: &str = "https://api.esv.org/v3";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Base URL and credential for one upstream scripture provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEndpoint {
    /// Absolute base URL, e.g. `https://api.esv.org/v3`.
    pub base_url: Url,
    /// API key sent with every request to this provider.
    pub api_key: String,
}

pub struct Config {
    pub bind_addr: SocketAddr,

    pub scripture: ApiEndpoint,
    pub esv: ApiEndpoint,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here with the process environment; tests pass a map instead.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `BIBLE_KEY` or `ESV_KEY` unset or blank
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - Unparsable bind address or base URL
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bible_api_key = required(&lookup, "BIBLE_KEY")?;
        let esv_api_key = required(&lookup, "ESV_KEY")?;

        let bind_addr = optional(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                value: bind_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            bind_addr,
            scripture: ApiEndpoint {
                base_url: base_url(&lookup, "SCRIPTURE_API_URL", DEFAULT_SCRIPTURE_API_URL)?,
                api_key: bible_api_key,
            },
            esv: ApiEndpoint {
                base_url: base_url(&lookup, "ESV_API_URL", DEFAULT_ESV_API_URL)?,
                api_key: esv_api_key,
            },
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn optional<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Reads an upstream base URL, rejecting anything that cannot have path segments appended.
fn base_url<F>(lookup: &F, name: &str, default: &str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = optional(lookup, name, default);
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason,
    };

    let url = Url::parse(value.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an absolute http(s) URL".to_string()));
    }

    Ok(url)
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    /// Tests loading configuration with only the required keys set.
    ///
    /// Expected: Ok with provider defaults and the default bind address
    #[test]
    fn applies_defaults_for_optional_variables() -> Result<(), AppError> {
        let config = Config::from_lookup(lookup_from(&[
            ("BIBLE_KEY", "bible-key"),
            ("ESV_KEY", "esv-key"),
        ]))?;

        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.scripture.api_key, "bible-key");
        assert_eq!(
            config.scripture.base_url.as_str(),
            "https://api.scripture.api.bible/v1"
        );
        assert_eq!(config.esv.api_key, "esv-key");
        assert_eq!(config.esv.base_url.as_str(), "https://api.esv.org/v3");

        Ok(())
    }

    /// Tests overriding upstream URLs and the bind address.
    ///
    /// Expected: Ok with overrides applied and trailing slash removed
    #[test]
    fn honours_overrides() -> Result<(), AppError> {
        let config = Config::from_lookup(lookup_from(&[
            ("BIBLE_KEY", "bible-key"),
            ("ESV_KEY", "esv-key"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("SCRIPTURE_API_URL", "http://localhost:9000/v1/"),
            ("ESV_API_URL", "http://localhost:9001"),
        ]))?;

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(
            config.scripture.base_url.as_str(),
            "http://localhost:9000/v1"
        );
        assert_eq!(config.esv.base_url.as_str(), "http://localhost:9001/");

        Ok(())
    }

    /// Tests that a blank API key is treated as missing.
    ///
    /// Expected: Err(MissingEnvVar("ESV_KEY"))
    #[test]
    fn rejects_blank_api_key() {
        let result = Config::from_lookup(lookup_from(&[
            ("BIBLE_KEY", "bible-key"),
            ("ESV_KEY", "  "),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "ESV_KEY"
        ));
    }

    /// Tests that the missing variable is reported by its own name.
    ///
    /// Expected: Err(MissingEnvVar("BIBLE_KEY"))
    #[test]
    fn names_the_missing_variable() {
        let result = Config::from_lookup(lookup_from(&[("ESV_KEY", "esv-key")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "BIBLE_KEY"
        ));
    }

    /// Tests rejection of an unparsable bind address.
    ///
    /// Expected: Err(InvalidEnvVar) for BIND_ADDR
    #[test]
    fn rejects_invalid_bind_addr() {
        let result = Config::from_lookup(lookup_from(&[
            ("BIBLE_KEY", "bible-key"),
            ("ESV_KEY", "esv-key"),
            ("BIND_ADDR", "not-an-address"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "BIND_ADDR"
        ));
    }

    /// Tests rejection of a base URL that cannot carry a path.
    ///
    /// Expected: Err(InvalidEnvVar) for ESV_API_URL
    #[test]
    fn rejects_non_http_base_url() {
        let result = Config::from_lookup(lookup_from(&[
            ("BIBLE_KEY", "bible-key"),
            ("ESV_KEY", "esv-key"),
            ("ESV_API_URL", "mailto:someone@example.com"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "ESV_API_URL"
        ));
    }
}
