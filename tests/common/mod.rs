#![allow(dead_code)]

use aws_credential_types::provider::SharedCredentialsProvider;
use aws_credential_types::Credentials;
use httpmock::MockServer;
use sdb_demo::SimpleDbClient;
use url::Url;

pub fn static_credentials(session_token: Option<&str>) -> SharedCredentialsProvider {
    SharedCredentialsProvider::new(Credentials::new(
        "AKIDEXAMPLE",
        "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
        session_token.map(str::to_string),
        None,
        "test",
    ))
}

pub fn client_for(server: &MockServer) -> SimpleDbClient {
    let endpoint = Url::parse(&server.url("/")).unwrap();
    SimpleDbClient::new(endpoint, static_credentials(None))
}

pub fn create_domain_xml(request_id: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<CreateDomainResponse xmlns="http://sdb.amazonaws.com/doc/2009-04-15/">
  <ResponseMetadata>
    <RequestId>{}</RequestId>
    <BoxUsage>0.0055590278</BoxUsage>
  </ResponseMetadata>
</CreateDomainResponse>"#,
        request_id
    )
}

pub fn empty_response_xml(action: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<{0}Response xmlns="http://sdb.amazonaws.com/doc/2009-04-15/">
  <ResponseMetadata>
    <RequestId>ok-{0}</RequestId>
    <BoxUsage>0.0000219907</BoxUsage>
  </ResponseMetadata>
</{0}Response>"#,
        action
    )
}

pub fn list_domains_xml(domains: &[&str]) -> String {
    let names: String = domains
        .iter()
        .map(|d| format!("<DomainName>{}</DomainName>", d))
        .collect();
    format!(
        r#"<?xml version="1.0"?>
<ListDomainsResponse xmlns="http://sdb.amazonaws.com/doc/2009-04-15/">
  <ListDomainsResult>{}</ListDomainsResult>
  <ResponseMetadata><RequestId>list-req</RequestId></ResponseMetadata>
</ListDomainsResponse>"#,
        names
    )
}

pub fn domain_metadata_xml(item_count: u64) -> String {
    format!(
        r#"<?xml version="1.0"?>
<DomainMetadataResponse xmlns="http://sdb.amazonaws.com/doc/2009-04-15/">
  <DomainMetadataResult>
    <ItemCount>{}</ItemCount>
    <ItemNamesSizeBytes>120</ItemNamesSizeBytes>
    <AttributeNameCount>3</AttributeNameCount>
    <AttributeNamesSizeBytes>25</AttributeNamesSizeBytes>
    <AttributeValueCount>12</AttributeValueCount>
    <AttributeValuesSizeBytes>140</AttributeValuesSizeBytes>
    <Timestamp>1760870400</Timestamp>
  </DomainMetadataResult>
  <ResponseMetadata><RequestId>meta-req</RequestId></ResponseMetadata>
</DomainMetadataResponse>"#,
        item_count
    )
}

pub fn select_xml() -> String {
    r#"<?xml version="1.0"?>
<SelectResponse xmlns="http://sdb.amazonaws.com/doc/2009-04-15/">
  <SelectResult>
    <Item>
      <Name>cust_001</Name>
      <Attribute><Name>first_name</Name><Value>John</Value></Attribute>
      <Attribute><Name>last_name</Name><Value>Doe</Value></Attribute>
      <Attribute><Name>email</Name><Value>john@example.com</Value></Attribute>
    </Item>
  </SelectResult>
  <ResponseMetadata><RequestId>select-req</RequestId></ResponseMetadata>
</SelectResponse>"#
        .to_string()
}

pub fn error_xml(code: &str, message: &str, request_id: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<Response>
  <Errors>
    <Error>
      <Code>{}</Code>
      <Message>{}</Message>
      <BoxUsage>0.0000219907</BoxUsage>
    </Error>
  </Errors>
  <RequestID>{}</RequestID>
</Response>"#,
        code, message, request_id
    )
}
