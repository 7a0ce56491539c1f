mod common;

use common::*;
use httpmock::prelude::*;
use sdb_demo::core::samples::build_sample_records;
use sdb_demo::core::AttributeStore;
use sdb_demo::{DemoError, SimpleDbClient};
use url::Url;

#[tokio::test]
async fn test_create_domain_sends_signed_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("content-type", "application/x-www-form-urlencoded; charset=utf-8")
            .body_contains("AWSAccessKeyId=AKIDEXAMPLE")
            .body_contains("Action=CreateDomain")
            .body_contains("DomainName=customer")
            .body_contains("SignatureMethod=HmacSHA256")
            .body_contains("SignatureVersion=2")
            .body_contains("Version=2009-04-15")
            .body_contains("&Signature=");
        then.status(200).body(create_domain_xml("create-123"));
    });

    let client = client_for(&server);
    let output = client.create_domain("customer").await.unwrap();

    mock.assert();
    assert_eq!(output.metadata.request_id, "create-123");
    assert_eq!(output.metadata.box_usage, Some(0.0055590278));
}

#[tokio::test]
async fn test_session_token_is_forwarded() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .body_contains("Action=DeleteDomain")
            .body_contains("SecurityToken=session-token");
        then.status(200).body(empty_response_xml("DeleteDomain"));
    });

    let endpoint = Url::parse(&server.url("/")).unwrap();
    let client = SimpleDbClient::new(endpoint, static_credentials(Some("session-token")));
    client.delete_domain("customer").await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_list_domains_and_metadata() {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .body_contains("Action=ListDomains")
            .body_contains("MaxNumberOfDomains=100");
        then.status(200).body(list_domains_xml(&["customer", "orders"]));
    });
    let metadata_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .body_contains("Action=DomainMetadata")
            .body_contains("DomainName=orders");
        then.status(200).body(domain_metadata_xml(42));
    });

    let client = client_for(&server);
    let listed = client.list_domains(100, None).await.unwrap();
    let metadata = client.domain_metadata("orders").await.unwrap();

    list_mock.assert();
    metadata_mock.assert();
    assert_eq!(listed.domain_names, vec!["customer", "orders"]);
    assert!(listed.next_token.is_none());
    assert_eq!(metadata.item_count, 42);
    assert_eq!(metadata.attribute_name_count, 3);
}

#[tokio::test]
async fn test_list_domains_rejects_out_of_range_limit() {
    let server = MockServer::start();
    let client = client_for(&server);

    let result = client.list_domains(101, None).await;
    assert!(matches!(result, Err(DemoError::InvalidRequest { .. })));
}

#[tokio::test]
async fn test_batch_put_encodes_all_sample_records() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .body_contains("Action=BatchPutAttributes")
            .body_contains("DomainName=customer")
            .body_contains("Item.1.ItemName=cust_001")
            .body_contains("Item.2.ItemName=cust_002")
            .body_contains("Item.3.ItemName=cust_003")
            .body_contains("Item.4.ItemName=cust_004")
            .body_contains("Item.1.Attribute.3.Value=john%40example.com")
            .body_contains("Item.4.Attribute.1.Value=Bob")
            .body_contains("Item.2.Attribute.2.Replace=true");
        then.status(200).body(empty_response_xml("BatchPutAttributes"));
    });

    let client = client_for(&server);
    client
        .batch_put_attributes("customer", &build_sample_records())
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_select_parses_items() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .body_contains("Action=Select")
            .body_contains("ConsistentRead=true")
            .body_contains("SelectExpression=SELECT%20%2A%20FROM%20customer");
        then.status(200).body(select_xml());
    });

    let client = client_for(&server);
    let output = client
        .select("SELECT * FROM customer", true, None)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(output.items.len(), 1);
    assert_eq!(output.items[0].name, "cust_001");
    assert_eq!(output.items[0].attributes.len(), 3);
    assert_eq!(output.items[0].attributes[2].value, "john@example.com");
}

#[tokio::test]
async fn test_service_error_keeps_all_diagnostic_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/").body_contains("Action=Select");
        then.status(400).body(error_xml(
            "NoSuchDomain",
            "The specified domain does not exist.",
            "f5bba28c-2bd0-4b1d-a9ad-fcad9a6aa8a4",
        ));
    });

    let client = client_for(&server);
    let err = client
        .select("SELECT * FROM missing", false, None)
        .await
        .unwrap_err();

    mock.assert();
    let service = err.service_error().expect("expected a service error");
    assert_eq!(service.message, "The specified domain does not exist.");
    assert_eq!(service.status_code, 400);
    assert_eq!(service.error_code, "NoSuchDomain");
    assert_eq!(service.request_id, "f5bba28c-2bd0-4b1d-a9ad-fcad9a6aa8a4");
}

#[tokio::test]
async fn test_malformed_success_body_is_xml_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/").body_contains("Action=DomainMetadata");
        then.status(200).body("<DomainMetadataResponse><Oops>");
    });

    let client = client_for(&server);
    let result = client.domain_metadata("customer").await;
    assert!(matches!(result, Err(DemoError::Xml { .. })));
}
