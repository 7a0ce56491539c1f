use crate::utils::error::{DemoError, Result};
use url::Url;

pub const DEFAULT_REGION: &str = "us-east-1";

pub fn endpoint_for_region(region: &str) -> String {
    if region == DEFAULT_REGION {
        "https://sdb.amazonaws.com".to_string()
    } else {
        format!("https://sdb.{}.amazonaws.com", region)
    }
}

/// 明確指定的 endpoint 優先, 否則依區域推導
pub fn resolve_endpoint(region: &str, endpoint_override: Option<&str>) -> Result<Url> {
    let raw = match endpoint_override {
        Some(endpoint) => endpoint.to_string(),
        None => endpoint_for_region(region),
    };

    Url::parse(&raw).map_err(|e| DemoError::InvalidConfigValueError {
        field: "endpoint".to_string(),
        value: raw.clone(),
        reason: format!("Invalid URL format: {}", e),
    })
}
