use anyhow::Context;
use aws_config::BehaviorVersion;
use clap::Parser;
use sdb_demo::adapters::simpledb::endpoint::resolve_endpoint;
use sdb_demo::utils::{logger, validation::Validate};
use sdb_demo::{CliConfig, DemoOutcome, DemoRunner, SimpleDbClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting sdb-demo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut settings = cli
        .load_settings()
        .context("failed to load configuration")?;

    // 憑證與預設區域來自標準 AWS 設定鏈
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    if settings.region.is_none() {
        settings.region = sdk_config.region().map(|r| r.to_string());
    }

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let endpoint = resolve_endpoint(settings.region_or_default(), settings.endpoint.as_deref())?;
    tracing::info!("Using SimpleDB endpoint {}", endpoint);

    let client = SimpleDbClient::from_sdk_config(&sdk_config, endpoint)?;
    let mut runner = DemoRunner::new(client, settings);

    match runner.run_and_report().await? {
        DemoOutcome::Completed => tracing::info!("✅ SimpleDB demo completed successfully"),
        DemoOutcome::Aborted(err) => {
            tracing::info!("Demo stopped after service error {}", err.error_code)
        }
    }

    Ok(())
}
