use crate::config::toml_config::TomlConfig;
use crate::config::DemoSettings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// 所有參數皆為選填; 不帶參數即以預設值執行示範
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "sdb-demo")]
#[command(about = "Amazon SimpleDB demo: create a domain, insert sample customers, query, clean up")]
pub struct CliConfig {
    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Domain to create, query and delete (default: customer)")]
    pub domain: Option<String>,

    #[arg(long, help = "AWS region (default: from the AWS environment, then us-east-1)")]
    pub region: Option<String>,

    #[arg(long, help = "Override the SimpleDB endpoint URL")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Delay between insert and query, in milliseconds (default: 1000)")]
    pub propagation_delay_ms: Option<u64>,

    #[arg(long, help = "Maximum number of domains to list (1-100)")]
    pub max_domains: Option<u32>,

    #[arg(long, help = "Use a consistent read for the query")]
    pub consistent_read: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 預設值 < TOML 檔 < CLI 參數
    pub fn load_settings(&self) -> Result<DemoSettings> {
        let mut settings = DemoSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration file: {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        self.apply_to(&mut settings);
        Ok(settings)
    }

    pub fn apply_to(&self, settings: &mut DemoSettings) {
        if let Some(domain) = &self.domain {
            settings.domain_name = domain.clone();
        }
        if let Some(region) = &self.region {
            settings.region = Some(region.clone());
        }
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = Some(endpoint.clone());
        }
        if let Some(ms) = self.propagation_delay_ms {
            settings.propagation_delay = Duration::from_millis(ms);
        }
        if let Some(max) = self.max_domains {
            settings.max_domains = max;
        }
        if self.consistent_read {
            settings.consistent_read = true;
        }
    }
}
