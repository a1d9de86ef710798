#![allow(clippy::unwrap_used)]
// Integration tests for `CustomerClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use custbook_api::{AddressRecord, CustomerClient, CustomerRecord, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CustomerClient) {
    let server = MockServer::start().await;
    let client = CustomerClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn asha_json(id_field: &str) -> serde_json::Value {
    json!({
        id_field: "c-001",
        "firstName": "Asha",
        "lastName": "Rao",
        "phoneNumber": "9876543210",
        "emailAddress": "asha.rao@example.com",
        "addresses": [{
            "street": "12 MG Road",
            "city": "Warangal",
            "state": "Telangana",
            "pinCode": "506002",
            "isPrimary": false
        }]
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_customers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([asha_json("_id"), asha_json("id")])),
        )
        .mount(&server)
        .await;

    let customers = client.list_customers().await.unwrap();

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].record_id(), Some("c-001"));
    assert_eq!(customers[1].record_id(), Some("c-001"));
    assert_eq!(customers[0].addresses[0].city, "Warangal");
}

#[tokio::test]
async fn test_get_customer() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers/c-001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(asha_json("_id")))
        .mount(&server)
        .await;

    let customer = client.get_customer("c-001").await.unwrap();

    assert_eq!(customer.first_name, "Asha");
    assert_eq!(customer.email_address, "asha.rao@example.com");
}

#[tokio::test]
async fn test_create_customer_sends_draft_without_id() {
    let (server, client) = setup().await;

    let draft = CustomerRecord {
        first_name: "Asha".into(),
        last_name: "Rao".into(),
        phone_number: "9876543210".into(),
        email_address: "asha.rao@example.com".into(),
        addresses: vec![AddressRecord {
            street: "12 MG Road".into(),
            city: "Warangal".into(),
            state: "Telangana".into(),
            pin_code: "506002".into(),
            is_primary: false,
        }],
        ..CustomerRecord::default()
    };

    let mut expected_body = asha_json("id");
    expected_body.as_object_mut().unwrap().remove("id");

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(asha_json("_id")))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_customer(&draft).await.unwrap();

    assert_eq!(created.record_id(), Some("c-001"));
    assert_eq!(created.addresses, draft.addresses);
}

#[tokio::test]
async fn test_update_customer_returns_echo() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/customers/c-001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(asha_json("_id")))
        .mount(&server)
        .await;

    let record: CustomerRecord = serde_json::from_value(asha_json("id")).unwrap();
    let echo = client.update_customer("c-001", &record).await.unwrap();

    assert_eq!(echo.unwrap().record_id(), Some("c-001"));
}

#[tokio::test]
async fn test_update_customer_empty_body_is_none() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/customers/c-001"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let record: CustomerRecord = serde_json::from_value(asha_json("id")).unwrap();
    let echo = client.update_customer("c-001", &record).await.unwrap();

    assert!(echo.is_none());
}

#[tokio::test]
async fn test_delete_customer() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/customers/c-001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_customer("c-001").await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_unknown_customer_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_customer("missing").await.unwrap_err();

    assert!(err.is_not_found(), "expected NotFound, got: {err:?}");
    match err {
        Error::NotFound { path } => assert_eq!(path, "/customers/missing"),
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_message_is_extracted() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/customers/c-001"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "database unavailable"})),
        )
        .mount(&server)
        .await;

    let err = client.delete_customer("c-001").await.unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
        .mount(&server)
        .await;

    let err = client.list_customers().await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert!(err.to_string().contains("Bad gateway"), "got: {err}");
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.list_customers().await.unwrap_err();

    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "<html>oops</html>"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
