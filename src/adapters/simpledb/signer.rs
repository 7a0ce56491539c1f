//! SimpleDB Signature Version 2 (HmacSHA256).
//!
//! The string to sign is `METHOD\nhost\npath\ncanonical-query`, where the canonical
//! query holds every request parameter except `Signature`, sorted by key in byte order
//! and RFC 3986 encoded.

use crate::utils::error::{DemoError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_VERSION: &str = "2";
pub const SIGNATURE_METHOD: &str = "HmacSHA256";

pub fn canonical_query(params: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    sorted
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Host header value as the server sees it: lowercase, port only when non-default.
pub fn host_header(endpoint: &Url) -> String {
    let host = endpoint.host_str().unwrap_or_default().to_ascii_lowercase();
    match endpoint.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    }
}

pub fn string_to_sign(method: &str, host: &str, path: &str, canonical_query: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };
    format!("{}\n{}\n{}\n{}", method, host, path, canonical_query)
}

pub fn sign(secret_key: &str, string_to_sign: &str) -> Result<String> {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).map_err(|e| DemoError::Credentials {
            message: format!("Invalid signing key: {}", e),
        })?;
    mac.update(string_to_sign.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
