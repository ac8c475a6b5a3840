use crate::utils::error::{PokedexError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PokedexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PokedexError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PokedexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| PokedexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(PokedexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PokedexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Shared checks for every `ConfigProvider`
pub fn validate_provider<C: crate::domain::ports::ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_socket_addr("bind_address", config.bind_address())?;
    validate_url("pokeapi_url", config.pokeapi_url())?;
    validate_url("translation_url", config.translation_url())?;
    validate_positive_number("request_timeout_secs", config.request_timeout_secs(), 1)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("pokeapi_url", "https://pokeapi.co/api/v2").is_ok());
        assert!(validate_url("pokeapi_url", "http://localhost:8080").is_ok());
        assert!(validate_url("pokeapi_url", "").is_err());
        assert!(validate_url("pokeapi_url", "invalid-url").is_err());
        assert!(validate_url("pokeapi_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("bind_address", "127.0.0.1:5000").is_ok());
        assert!(validate_socket_addr("bind_address", "0.0.0.0:0").is_ok());
        assert!(validate_socket_addr("bind_address", "localhost").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("request_timeout_secs", 30, 1).is_ok());
        assert!(validate_positive_number("request_timeout_secs", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "pikachu").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
        assert!(validate_non_empty_string("name", "").is_err());
    }
}
