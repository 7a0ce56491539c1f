use crate::core::samples::build_sample_records;
use crate::core::{
    AttributeStore, ConfigProvider, CreateDomainOutput, DomainSummary, ReplaceableItem,
    SelectOutput,
};
use crate::utils::error::{DemoError, Result, ServiceError};
use std::io::{Stdout, Write};

const BANNER_RULE: &str = "===========================================";

/// run_and_report 的結果: 完整跑完, 或因服務錯誤中止
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoOutcome {
    Completed,
    Aborted(ServiceError),
}

/// Runs the demo sequence against one store handle, writing status lines to `out`.
pub struct DemoRunner<S: AttributeStore, C: ConfigProvider, W: Write = Stdout> {
    store: S,
    config: C,
    out: W,
}

impl<S: AttributeStore, C: ConfigProvider> DemoRunner<S, C, Stdout> {
    pub fn new(store: S, config: C) -> Self {
        Self::with_output(store, config, std::io::stdout())
    }
}

impl<S: AttributeStore, C: ConfigProvider, W: Write> DemoRunner<S, C, W> {
    pub fn with_output(store: S, config: C, out: W) -> Self {
        Self { store, config, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn create_domain(&mut self) -> Result<CreateDomainOutput> {
        let domain = self.config.domain_name();
        tracing::info!("Creating domain '{}'", domain);
        self.store.create_domain(domain).await
    }

    /// 列出網域並逐一查詢 metadata 累加 item 數 (依序呼叫, 不並行)
    pub async fn list_domains(&mut self) -> Result<DomainSummary> {
        let max_domains = self.config.max_domains();
        tracing::info!("Listing up to {} domains", max_domains);
        let listed = self.store.list_domains(max_domains, None).await?;

        let mut total_items = 0u64;
        for domain_name in &listed.domain_names {
            let metadata = self.store.domain_metadata(domain_name).await?;
            tracing::debug!("Domain '{}' holds {} items", domain_name, metadata.item_count);
            total_items += metadata.item_count;
        }

        let summary = DomainSummary {
            domain_count: listed.domain_names.len(),
            total_items,
        };

        writeln!(
            self.out,
            "You have {} Amazon SimpleDB domain(s) containing a total of {} items.",
            summary.domain_count, summary.total_items
        )?;

        Ok(summary)
    }

    pub fn build_sample_records(&self) -> Vec<ReplaceableItem> {
        build_sample_records()
    }

    pub async fn insert_records(&mut self, records: &[ReplaceableItem]) -> Result<()> {
        let domain = self.config.domain_name();
        tracing::info!("Inserting {} records into '{}'", records.len(), domain);
        self.store.batch_put_attributes(domain, records).await
    }

    pub async fn query_domain(&mut self) -> Result<SelectOutput> {
        let expression = self.config.select_expression();
        tracing::info!("Running query: {}", expression);
        let result = self
            .store
            .select(&expression, self.config.consistent_read(), None)
            .await?;

        writeln!(self.out, "{}", result)?;
        Ok(result)
    }

    pub async fn delete_domain(&mut self) -> Result<()> {
        let domain = self.config.domain_name();
        tracing::info!("Deleting domain '{}'", domain);
        self.store.delete_domain(domain).await
    }

    /// 依序執行整個示範流程, 第一個錯誤即中止後續步驟
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", BANNER_RULE)?;
        writeln!(self.out, "AWS SimpleDB Demo app")?;
        writeln!(self.out, "{}", BANNER_RULE)?;

        let created = self.create_domain().await?;
        writeln!(self.out, "{}", created)?;

        self.list_domains().await?;

        let records = self.build_sample_records();
        self.insert_records(&records).await?;

        // 等待最終一致性傳播 (盡力而為, 不保證查詢一定看得到剛寫入的資料)
        let delay = self.config.propagation_delay();
        if !delay.is_zero() {
            tracing::debug!("Waiting {:?} for write propagation", delay);
            tokio::time::sleep(delay).await;
        }

        self.query_domain().await?;
        self.delete_domain().await?;

        tracing::info!("✅ Demo sequence completed");
        Ok(())
    }

    /// run() 並攔截服務錯誤: 印出四個診斷欄位後正常結束, 其他錯誤往上傳
    pub async fn run_and_report(&mut self) -> Result<DemoOutcome> {
        match self.run().await {
            Ok(()) => Ok(DemoOutcome::Completed),
            Err(DemoError::Service(err)) => {
                tracing::warn!("❌ Demo aborted by service error: {}", err);
                report_service_error(&mut self.out, &err)?;
                Ok(DemoOutcome::Aborted(err))
            }
            Err(e) => Err(e),
        }
    }
}

pub fn report_service_error<W: Write>(out: &mut W, err: &ServiceError) -> std::io::Result<()> {
    writeln!(out, "Caught Exception: {}", err.message)?;
    writeln!(out, "Response Status Code: {}", err.status_code)?;
    writeln!(out, "Error Code: {}", err.error_code)?;
    writeln!(out, "Request ID: {}", err.request_id)?;
    Ok(())
}
