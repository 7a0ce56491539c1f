//! Amazon SimpleDB client over the Query API (HTTP POST, Signature V2, XML responses).

pub mod endpoint;
pub mod signer;
pub mod xml;

use crate::core::{
    AttributeStore, CreateDomainOutput, DomainMetadata, ListDomainsOutput, ReplaceableItem,
    SelectOutput,
};
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

pub const API_VERSION: &str = "2009-04-15";
pub const MAX_BATCH_ITEMS: usize = 25;
pub const MAX_ATTRIBUTES_PER_ITEM: usize = 256;
pub const MAX_LIST_DOMAINS: u32 = 100;

#[derive(Debug, Clone)]
pub struct SimpleDbClient {
    http: Client,
    endpoint: Url,
    credentials: SharedCredentialsProvider,
}

impl SimpleDbClient {
    pub fn new(endpoint: Url, credentials: SharedCredentialsProvider) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            credentials,
        }
    }

    /// 使用 aws-config 載入的預設憑證鏈 (~/.aws/credentials, 環境變數, profile)
    pub fn from_sdk_config(sdk_config: &SdkConfig, endpoint: Url) -> Result<Self> {
        let credentials =
            sdk_config
                .credentials_provider()
                .ok_or_else(|| DemoError::Credentials {
                    message: "no credentials provider found in the AWS environment".to_string(),
                })?;
        Ok(Self::new(endpoint, credentials))
    }

    async fn send(&self, action: &str, params: Vec<(String, String)>) -> Result<String> {
        let credentials = self
            .credentials
            .provide_credentials()
            .await
            .map_err(|e| DemoError::Credentials {
                message: e.to_string(),
            })?;

        let timestamp = chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string();

        let mut all_params = vec![
            ("Action".to_string(), action.to_string()),
            ("Version".to_string(), API_VERSION.to_string()),
            (
                "AWSAccessKeyId".to_string(),
                credentials.access_key_id().to_string(),
            ),
            ("Timestamp".to_string(), timestamp),
            (
                "SignatureVersion".to_string(),
                signer::SIGNATURE_VERSION.to_string(),
            ),
            (
                "SignatureMethod".to_string(),
                signer::SIGNATURE_METHOD.to_string(),
            ),
        ];
        if let Some(token) = credentials.session_token() {
            all_params.push(("SecurityToken".to_string(), token.to_string()));
        }
        all_params.extend(params);

        let canonical = signer::canonical_query(&all_params);
        let string_to_sign = signer::string_to_sign(
            "POST",
            &signer::host_header(&self.endpoint),
            self.endpoint.path(),
            &canonical,
        );
        let signature = signer::sign(credentials.secret_access_key(), &string_to_sign)?;
        let body = format!(
            "{}&Signature={}",
            canonical,
            urlencoding::encode(&signature)
        );

        tracing::debug!("SimpleDB request: {} -> {}", action, self.endpoint);
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(
                CONTENT_TYPE,
                "application/x-www-form-urlencoded; charset=utf-8",
            )
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("SimpleDB response: {} -> {}", action, status);

        if !status.is_success() {
            let err = xml::parse_error(status.as_u16(), &text);
            tracing::warn!(
                "SimpleDB {} failed: {} ({})",
                action,
                err.error_code,
                err.status_code
            );
            return Err(DemoError::Service(err));
        }

        Ok(text)
    }
}

fn param(key: impl Into<String>, value: impl Into<String>) -> (String, String) {
    (key.into(), value.into())
}

fn invalid_request(message: String) -> DemoError {
    DemoError::InvalidRequest { message }
}

/// BatchPutAttributes 參數: Item.N.ItemName, Item.N.Attribute.M.{Name,Value,Replace}
pub fn batch_put_params(
    domain_name: &str,
    items: &[ReplaceableItem],
) -> Result<Vec<(String, String)>> {
    if items.is_empty() || items.len() > MAX_BATCH_ITEMS {
        return Err(invalid_request(format!(
            "a batch must contain between 1 and {} items, got {}",
            MAX_BATCH_ITEMS,
            items.len()
        )));
    }

    let mut params = vec![param("DomainName", domain_name)];
    for (i, item) in items.iter().enumerate() {
        if item.attributes.len() > MAX_ATTRIBUTES_PER_ITEM {
            return Err(invalid_request(format!(
                "item '{}' has {} attributes, the limit is {}",
                item.name,
                item.attributes.len(),
                MAX_ATTRIBUTES_PER_ITEM
            )));
        }

        let item_prefix = format!("Item.{}", i + 1);
        params.push(param(format!("{}.ItemName", item_prefix), item.name.as_str()));
        for (j, attr) in item.attributes.iter().enumerate() {
            let attr_prefix = format!("{}.Attribute.{}", item_prefix, j + 1);
            params.push(param(format!("{}.Name", attr_prefix), attr.name.as_str()));
            params.push(param(format!("{}.Value", attr_prefix), attr.value.as_str()));
            if attr.replace {
                params.push(param(format!("{}.Replace", attr_prefix), "true"));
            }
        }
    }

    Ok(params)
}

#[async_trait]
impl AttributeStore for SimpleDbClient {
    async fn create_domain(&self, domain_name: &str) -> Result<CreateDomainOutput> {
        let body = self
            .send("CreateDomain", vec![param("DomainName", domain_name)])
            .await?;
        let root = xml::parse_document(&body)?;
        Ok(CreateDomainOutput {
            metadata: xml::parse_response_metadata(&root),
        })
    }

    async fn delete_domain(&self, domain_name: &str) -> Result<()> {
        self.send("DeleteDomain", vec![param("DomainName", domain_name)])
            .await?;
        Ok(())
    }

    async fn list_domains(
        &self,
        max_domains: u32,
        next_token: Option<&str>,
    ) -> Result<ListDomainsOutput> {
        if max_domains == 0 || max_domains > MAX_LIST_DOMAINS {
            return Err(invalid_request(format!(
                "MaxNumberOfDomains must be between 1 and {}, got {}",
                MAX_LIST_DOMAINS, max_domains
            )));
        }

        let mut params = vec![param("MaxNumberOfDomains", max_domains.to_string())];
        if let Some(token) = next_token {
            params.push(param("NextToken", token));
        }

        let body = self.send("ListDomains", params).await?;
        xml::parse_list_domains(&body)
    }

    async fn domain_metadata(&self, domain_name: &str) -> Result<DomainMetadata> {
        let body = self
            .send("DomainMetadata", vec![param("DomainName", domain_name)])
            .await?;
        xml::parse_domain_metadata(&body)
    }

    async fn batch_put_attributes(
        &self,
        domain_name: &str,
        items: &[ReplaceableItem],
    ) -> Result<()> {
        let params = batch_put_params(domain_name, items)?;
        self.send("BatchPutAttributes", params).await?;
        Ok(())
    }

    async fn select(
        &self,
        select_expression: &str,
        consistent_read: bool,
        next_token: Option<&str>,
    ) -> Result<SelectOutput> {
        let mut params = vec![param("SelectExpression", select_expression)];
        if consistent_read {
            params.push(param("ConsistentRead", "true"));
        }
        if let Some(token) = next_token {
            params.push(param("NextToken", token));
        }

        let body = self.send("Select", params).await?;
        xml::parse_select(&body)
    }
}
