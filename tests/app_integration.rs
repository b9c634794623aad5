use std::fs;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const LATEST_PATH: &str = "/v3/latest";

    pub async fn create_mock_server(mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub async fn create_failing_mock_server() -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn provider_for(server: &MockServer) -> fxc::providers::CurrencyApiProvider {
        fxc::providers::CurrencyApiProvider::new(
            &format!("{}{}", server.uri(), LATEST_PATH),
            "test-key",
        )
    }
}

const RATES_RESPONSE: &str = r#"{
    "data": {
        "EUR": {"value": 0.85},
        "GBP": {"value": 0.73},
        "JPY": {"value": 147.2},
        "PKR": {"value": 278.5},
        "USD": {"value": 1.0}
    }
}"#;

#[test_log::test(tokio::test)]
async fn test_full_convert_flow_with_mock() {
    let mock_server = test_utils::create_mock_server(RATES_RESPONSE).await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    let config_content = format!(
        r#"
provider:
  base_url: "{}{}"
  api_key: "test-key"
base_currency: "USD"
target_currency: "EUR"
"#,
        mock_server.uri(),
        test_utils::LATEST_PATH
    );
    fs::write(config_path, &config_content).expect("Failed to write config file");

    let result = fxc::run_command(
        fxc::AppCommand::Convert {
            amount: "100".to_string(),
            from: None,
            to: None,
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Convert command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_full_trend_flow_degrades_on_server_error() {
    let mock_server = test_utils::create_failing_mock_server().await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    let config_content = format!(
        r#"
provider:
  base_url: "{}{}"
  api_key: "test-key"
"#,
        mock_server.uri(),
        test_utils::LATEST_PATH
    );
    fs::write(config_path, &config_content).expect("Failed to write config file");

    // The trend is illustrative; a failing rate source must not fail the
    // command.
    let result = fxc::run_command(
        fxc::AppCommand::Trend {
            from: None,
            to: None,
            days: None,
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Trend command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_convert_computes_expected_amount() {
    use fxc::engine::ConversionEngine;

    let mock_server = test_utils::create_mock_server(RATES_RESPONSE).await;
    let provider = test_utils::provider_for(&mock_server);
    let mut engine = ConversionEngine::new(&provider);

    let conversion = engine.convert("USD", "EUR", "100").await.unwrap();
    info!(converted = conversion.converted, "Received conversion");

    assert_eq!(conversion.converted_display(), 85.00);
    assert_eq!(conversion.summary(), "100 USD = 85.00 EUR");
    assert_eq!(engine.history().len(), 1);
}

#[test_log::test(tokio::test)]
async fn test_convert_unknown_currency() {
    use fxc::engine::ConversionEngine;
    use fxc::error::ConvertError;

    let mock_server = test_utils::create_mock_server(RATES_RESPONSE).await;
    let provider = test_utils::provider_for(&mock_server);
    let mut engine = ConversionEngine::new(&provider);

    let result = engine.convert("USD", "XXX", "100").await;
    assert!(matches!(result, Err(ConvertError::UnknownCurrency { .. })));
}

#[test_log::test(tokio::test)]
async fn test_convert_invalid_amount_performs_no_fetch() {
    use fxc::engine::ConversionEngine;
    use fxc::error::ConvertError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(test_utils::LATEST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(RATES_RESPONSE))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = test_utils::provider_for(&mock_server);
    let mut engine = ConversionEngine::new(&provider);

    let result = engine.convert("USD", "EUR", "not-a-number").await;
    assert!(matches!(result, Err(ConvertError::InvalidAmount { .. })));
}

#[test_log::test(tokio::test)]
async fn test_history_retains_last_ten_conversions() {
    use fxc::engine::ConversionEngine;

    let mock_server = test_utils::create_mock_server(RATES_RESPONSE).await;
    let provider = test_utils::provider_for(&mock_server);
    let mut engine = ConversionEngine::new(&provider);

    for i in 1..=11 {
        engine
            .convert("USD", "EUR", &i.to_string())
            .await
            .unwrap();
    }

    assert_eq!(engine.history().len(), 10);
    let entries: Vec<&str> = engine.history().entries().collect();
    assert!(!entries.contains(&"1 USD = 0.85 EUR"));
    assert_eq!(entries.last(), Some(&"11 USD = 9.35 EUR"));
}

#[test_log::test(tokio::test)]
async fn test_trend_anchored_on_live_rate() {
    use fxc::engine::ConversionEngine;

    let mock_server = test_utils::create_mock_server(RATES_RESPONSE).await;
    let provider = test_utils::provider_for(&mock_server);
    let engine = ConversionEngine::new(&provider);

    let series = engine.build_trend("USD", "EUR", 7).await;
    assert_eq!(series.len(), 7);
    assert_eq!(series[3].value, 0.85);
    assert_eq!(series[6].value, 0.8755);
}

#[test_log::test(tokio::test)]
async fn test_trend_flat_on_fetch_failure() {
    use fxc::engine::ConversionEngine;

    let mock_server = test_utils::create_failing_mock_server().await;
    let provider = test_utils::provider_for(&mock_server);
    let engine = ConversionEngine::new(&provider);

    let series = engine.build_trend("USD", "EUR", 7).await;
    assert_eq!(series.len(), 7);
    assert!(series.iter().all(|p| p.value == 1.0));
}

#[test_log::test(tokio::test)]
async fn test_currency_list_falls_back_when_source_is_down() {
    use fxc::rates::RateProvider;

    let mock_server = test_utils::create_failing_mock_server().await;
    let provider = test_utils::provider_for(&mock_server);

    let currencies = provider.list_currencies().await;
    assert_eq!(currencies, vec!["USD", "EUR", "GBP", "PKR", "JPY"]);
}

#[test_log::test(tokio::test)]
async fn test_currency_list_sorted_from_source() {
    use fxc::rates::RateProvider;

    let mock_server = test_utils::create_mock_server(RATES_RESPONSE).await;
    let provider = test_utils::provider_for(&mock_server);

    let currencies = provider.list_currencies().await;
    assert_eq!(currencies, vec!["EUR", "GBP", "JPY", "PKR", "USD"]);
}
