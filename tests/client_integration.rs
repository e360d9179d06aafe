use chrono::NaiveDate;
use serde_json::json;
use tushare_api::{BakBasicQuery, Client, DailyQuery, Error};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn range_query() -> DailyQuery {
    DailyQuery::new("600000.SH", "20240814", "20240816")
}

#[tokio::test]
async fn daily_success_is_indexed_and_ascending() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("daily.json");

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-token");
    let series = client.daily(&range_query()).await.unwrap();

    // Fixture rows are newest-first; the series must come back oldest-first.
    assert_eq!(series.len(), 3);
    let dates: Vec<NaiveDate> = series.dates().collect();
    assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));

    let aug_15 = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
    assert_eq!(series.get(aug_15).unwrap().close, Some(7.18));
}

#[tokio::test]
async fn daily_records_keeps_provider_order_and_fields() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("daily.json");

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-token");
    let records = client.daily_records(&range_query()).await.unwrap();

    assert_eq!(records.len(), 3);
    // First record is still the provider's newest row, date still text.
    assert_eq!(records[0]["trade_date"], "20240816");
    assert_eq!(records[2]["trade_date"], "20240814");

    let keys: Vec<&String> = records[0].keys().collect();
    assert_eq!(keys[0], "ts_code");
    assert_eq!(keys[1], "trade_date");
    assert_eq!(keys.len(), 11);
}

#[tokio::test]
async fn daily_records_empty_response_yields_empty_vec() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("daily_empty.json");

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-token");
    let records = client.daily_records(&range_query()).await.unwrap();
    assert!(records.is_empty());

    let series = client.daily(&range_query()).await.unwrap();
    assert!(series.is_empty());
}

#[tokio::test]
async fn daily_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-token");
    let result = client.daily(&range_query()).await;
    assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
}

#[tokio::test]
async fn daily_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-token");
    let result = client.daily(&range_query()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn provider_error_code_surfaces_unchanged() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("api_error.json");

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-token");
    match client.daily(&range_query()).await {
        Err(Error::Api { code, msg }) => {
            assert_eq!(code, 2002);
            assert!(msg.contains("权限"));
        }
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn request_carries_token_and_api_name() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("daily.json");

    // The mock only matches when the envelope names the right API and token,
    // so a successful call proves both were sent.
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "api_name": "daily",
            "token": "test-token",
            "params": {
                "ts_code": "600000.SH",
                "start_date": "20240814",
                "end_date": "20240816"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-token");
    assert!(client.daily(&range_query()).await.is_ok());
}

#[tokio::test]
async fn bak_basic_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("bak_basic.json");

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"api_name": "bak_basic"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-token");
    let stocks = client.bak_basic(&BakBasicQuery::default()).await.unwrap();

    assert_eq!(stocks.len(), 2);
    assert_eq!(stocks[0].ts_code, "600000.SH");
    assert_eq!(stocks[0].name.as_deref(), Some("浦发银行"));
    assert_eq!(stocks[0].list_date.as_deref(), Some("19991110"));
    assert_eq!(stocks[1].ts_code, "000001.SZ");
}

#[tokio::test]
async fn bak_basic_is_idempotent_against_stable_upstream() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("bak_basic.json");

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-token");
    let first = client.bak_basic(&BakBasicQuery::default()).await.unwrap();
    let second = client.bak_basic(&BakBasicQuery::default()).await.unwrap();
    assert_eq!(first, second);
}
