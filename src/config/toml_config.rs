use crate::config::DemoSettings;
use crate::utils::error::{DemoError, Result};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub demo: Option<DemoSection>,
    pub aws: Option<AwsSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoSection {
    pub domain_name: Option<String>,
    pub max_domains: Option<u32>,
    pub select_expression: Option<String>,
    pub propagation_delay_ms: Option<u64>,
    pub consistent_read: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwsSection {
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SDB_DOMAIN}), 找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    /// 將檔案中有設定的欄位覆蓋到 settings 上
    pub fn apply_to(&self, settings: &mut DemoSettings) {
        if let Some(demo) = &self.demo {
            if let Some(name) = &demo.domain_name {
                settings.domain_name = name.clone();
            }
            if let Some(max) = demo.max_domains {
                settings.max_domains = max;
            }
            if let Some(expression) = &demo.select_expression {
                settings.select_expression = Some(expression.clone());
            }
            if let Some(ms) = demo.propagation_delay_ms {
                settings.propagation_delay = Duration::from_millis(ms);
            }
            if let Some(consistent) = demo.consistent_read {
                settings.consistent_read = consistent;
            }
        }

        if let Some(aws) = &self.aws {
            if let Some(region) = &aws.region {
                settings.region = Some(region.clone());
            }
            if let Some(endpoint) = &aws.endpoint {
                settings.endpoint = Some(endpoint.clone());
            }
        }
    }
}
