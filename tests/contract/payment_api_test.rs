// Contract tests for the payment resource: fetch, list and capture against
// a wiremock stand-in for the live API.

use razorpay::{params, Client, Config};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAYMENT_ID: &str = "pay_FIKOnlyii5QGNx";
const INVOICE_ID: &str = "inv_6vRZmJYFAG1mNq";

fn client_for(server: &MockServer) -> Client {
    let config = Config::new("rzp_test_key", "secret").with_base_url(server.uri());
    Client::with_config(config).expect("client over mock server")
}

fn authorized_payment() -> Value {
    json!({
        "id": PAYMENT_ID,
        "entity": "payment",
        "amount": 100,
        "currency": "INR",
        "status": "authorized",
        "invoice_id": INVOICE_ID,
        "method": "netbanking",
        "captured": false,
        "email": "test@example.com",
        "contact": "9876543210",
        "created_at": 1480769038
    })
}

fn captured_payment() -> Value {
    let mut payment = authorized_payment();
    payment["status"] = json!("captured");
    payment["captured"] = json!(true);
    payment["fee"] = json!(2);
    payment["tax"] = json!(0);
    payment
}

#[tokio::test]
async fn test_fetch_payment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/payments/{PAYMENT_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(authorized_payment()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payment = client.payments().fetch(PAYMENT_ID).await.unwrap();

    assert_eq!(payment.id, PAYMENT_ID);
    assert_eq!(payment.status.as_deref(), Some("authorized"));
    assert_eq!(payment.invoice_id.as_deref(), Some(INVOICE_ID));
    assert_eq!(payment.captured, Some(false));
}

#[tokio::test]
async fn test_fetch_all_payments_with_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments"))
        .and(query_param("count", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entity": "collection",
            "count": 1,
            "items": [captured_payment()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payments = client
        .payments()
        .all(Some(params! { "count": 10 }))
        .await
        .unwrap();

    assert_eq!(payments.len(), 1);
    assert_eq!(payments.items()[0].status.as_deref(), Some("captured"));
}

#[tokio::test]
async fn test_capture_payment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/payments/{PAYMENT_ID}/capture")))
        .and(body_json(json!({ "amount": 100, "currency": "INR" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(captured_payment()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payment = client
        .payments()
        .capture(PAYMENT_ID, params! { "amount": 100, "currency": "INR" })
        .await
        .unwrap();

    assert_eq!(payment.status.as_deref(), Some("captured"));
    assert_eq!(payment.captured, Some(true));
    assert_eq!(payment.fee, Some(2));
}
