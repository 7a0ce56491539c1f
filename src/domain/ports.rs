use crate::domain::model::{
    CreateDomainOutput, DomainMetadata, ListDomainsOutput, ReplaceableItem, SelectOutput,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 遠端屬性儲存服務的邊界。每個方法對應一次遠端呼叫。
#[async_trait]
pub trait AttributeStore: Send + Sync {
    async fn create_domain(&self, domain_name: &str) -> Result<CreateDomainOutput>;
    async fn delete_domain(&self, domain_name: &str) -> Result<()>;
    async fn list_domains(
        &self,
        max_domains: u32,
        next_token: Option<&str>,
    ) -> Result<ListDomainsOutput>;
    async fn domain_metadata(&self, domain_name: &str) -> Result<DomainMetadata>;
    async fn batch_put_attributes(
        &self,
        domain_name: &str,
        items: &[ReplaceableItem],
    ) -> Result<()>;
    async fn select(
        &self,
        select_expression: &str,
        consistent_read: bool,
        next_token: Option<&str>,
    ) -> Result<SelectOutput>;
}

pub trait ConfigProvider: Send + Sync {
    fn domain_name(&self) -> &str;
    fn max_domains(&self) -> u32;
    fn select_expression(&self) -> String;
    fn propagation_delay(&self) -> Duration;
    fn consistent_read(&self) -> bool;
}
