use crate::utils::error::{ProxyError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ProxyError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ProxyError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// Secrets go through here, so the rejected value is never echoed back.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "<blank>".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("selro_api_url", "https://api.selro.com/8/orders").is_ok());
        assert!(validate_url("selro_api_url", "http://127.0.0.1:9000/8/orders").is_ok());
        assert!(validate_url("selro_api_url", "").is_err());
        assert!(validate_url("selro_api_url", "invalid-url").is_err());
        assert!(validate_url("selro_api_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("key".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("selro_key", &present).unwrap(), "key");

        match validate_required_field("selro_key", &missing) {
            Err(ProxyError::MissingConfigError { field }) => assert_eq!(field, "selro_key"),
            other => panic!("expected MissingConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_non_empty_string_hides_value() {
        assert!(validate_non_empty_string("api_auth_token", "token").is_ok());
        let err = validate_non_empty_string("api_auth_token", "   ").unwrap_err();
        assert!(err.to_string().contains("<blank>"));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("max_pages", 100u32, 1, 1000).is_ok());
        assert!(validate_range("max_pages", 0u32, 1, 1000).is_err());
        assert!(validate_range("max_pages", 1001u32, 1, 1000).is_err());
    }
}
