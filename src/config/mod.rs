#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::simpledb::endpoint::DEFAULT_REGION;
use crate::adapters::simpledb::MAX_LIST_DOMAINS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_DOMAIN_NAME: &str = "customer";
pub const DEFAULT_PROPAGATION_DELAY_MS: u64 = 1000;

/// 合併後的示範設定 (預設值 < TOML 檔 < CLI 參數)
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSettings {
    pub domain_name: String,
    pub max_domains: u32,
    pub select_expression: Option<String>,
    pub propagation_delay: Duration,
    pub consistent_read: bool,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            domain_name: DEFAULT_DOMAIN_NAME.to_string(),
            max_domains: MAX_LIST_DOMAINS,
            select_expression: None,
            propagation_delay: Duration::from_millis(DEFAULT_PROPAGATION_DELAY_MS),
            consistent_read: false,
            region: None,
            endpoint: None,
        }
    }
}

impl DemoSettings {
    pub fn region_or_default(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }
}

impl ConfigProvider for DemoSettings {
    fn domain_name(&self) -> &str {
        &self.domain_name
    }

    fn max_domains(&self) -> u32 {
        self.max_domains
    }

    fn select_expression(&self) -> String {
        self.select_expression
            .clone()
            .unwrap_or_else(|| format!("SELECT * FROM {}", quote_identifier(&self.domain_name)))
    }

    fn propagation_delay(&self) -> Duration {
        self.propagation_delay
    }

    fn consistent_read(&self) -> bool {
        self.consistent_read
    }
}

impl Validate for DemoSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_domain_name("domain_name", &self.domain_name)?;
        validation::validate_range("max_domains", self.max_domains, 1, MAX_LIST_DOMAINS)?;

        if let Some(expression) = &self.select_expression {
            validation::validate_non_empty_string("select_expression", expression)?;
        }
        if let Some(region) = &self.region {
            validation::validate_aws_region("region", region)?;
        }
        if let Some(endpoint) = &self.endpoint {
            validation::validate_url("endpoint", endpoint)?;
        }

        tracing::debug!("✅ Demo configuration validation passed");
        Ok(())
    }
}

/// Select 表示式中的網域名稱: 非 [A-Za-z0-9_$] 或數字開頭時需以反引號包住
pub fn quote_identifier(name: &str) -> String {
    let plain = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if plain {
        name.to_string()
    } else {
        format!("`{}`", name.replace('`', "``"))
    }
}
