// data/quote_client.rs
//
// Builds the prediction request and collapses whatever comes back into a
// RequestOutcome. This is the single place that decides what counts as a
// network failure, a backend rejection, or a usable payload.

use {
    crate::{
        config::ENDPOINT,
        data::http::{HttpClient, HttpRequest, HttpResponse},
        domain::{ChartSeries, PredictionResult, Recommendation, RequestOutcome, TickerSymbol},
        ui::UI_TEXT,
    },
    serde::Deserialize,
    std::{str::FromStr, sync::Arc},
};

/// Raw success-response body. Every field is optional so a missing or
/// mistyped field surfaces as a shape failure we classify ourselves,
/// never as a deserialization abort.
#[derive(Debug, Deserialize)]
struct QuoteBody {
    #[serde(default)]
    ticker: Option<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    current_price: Option<f64>,
    #[serde(default)]
    predicted_price: Option<f64>,
    #[serde(default)]
    sma10: Option<f64>,
    #[serde(default)]
    sma50: Option<f64>,
    #[serde(default)]
    rsi14: Option<f64>,
    #[serde(default)]
    recommendation: Option<String>,
    #[serde(default)]
    chart: Option<QuoteChart>,
}

#[derive(Debug, Deserialize)]
struct QuoteChart {
    #[serde(default)]
    labels: Option<Vec<String>>,
    #[serde(default)]
    values: Option<Vec<f64>>,
}

/// One prediction request, one classified outcome. No retries.
pub struct QuoteClient {
    http: Arc<dyn HttpClient>,
    quote_url: String,
}

impl QuoteClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: &str) -> Self {
        Self {
            http,
            quote_url: format!("{}{}", base_url.trim_end_matches('/'), ENDPOINT.quote_path),
        }
    }

    // Ticker symbols can carry '.', '&' or stray spaces; they go into the
    // query percent-encoded, always.
    fn build_quote_url(&self, ticker: &TickerSymbol) -> String {
        format!(
            "{}?ticker={}",
            self.quote_url,
            urlencoding::encode(ticker.as_str())
        )
    }

    pub async fn fetch_prediction(&self, ticker: &TickerSymbol) -> RequestOutcome {
        let url = self.build_quote_url(ticker);
        log::debug!("GET {}", url);

        let response = match self.http.execute(HttpRequest::get(url)).await {
            Ok(response) => response,
            Err(e) => {
                // The raw transport detail stays in the log; the UI gets
                // a fixed, user-safe message.
                log::error!("transport failure fetching {}: {}", ticker, e);
                return RequestOutcome::NetworkError(UI_TEXT.err_network.to_string());
            }
        };

        classify_response(ticker, &response)
    }
}

/// Classification order:
/// 1. a parseable body with a non-empty `error` field wins outright,
///    whatever the status: backends report unknown tickers with 200 and
///    rate limits with 500, and both carry the message worth showing;
/// 2. otherwise a non-success status is a server error;
/// 3. otherwise an unparseable body is an invalid response;
/// 4. otherwise the payload must pass shape validation or it is malformed.
fn classify_response(ticker: &TickerSymbol, response: &HttpResponse) -> RequestOutcome {
    let parsed: Option<serde_json::Value> = serde_json::from_str(&response.body).ok();

    if let Some(message) = parsed.as_ref().and_then(domain_error_message) {
        log::warn!(
            "backend rejected {}: {} (status {})",
            ticker,
            message,
            response.status
        );
        return RequestOutcome::DomainError(message);
    }

    if !response.is_success() {
        log::error!(
            "prediction request for {} failed with status {}",
            ticker,
            response.status
        );
        return RequestOutcome::NetworkError(UI_TEXT.err_server.to_string());
    }

    let Some(value) = parsed else {
        log::error!(
            "unparseable body for {} (status {}, {} bytes)",
            ticker,
            response.status,
            response.body.len()
        );
        return RequestOutcome::NetworkError(UI_TEXT.err_invalid_response.to_string());
    };

    match build_result(value) {
        Some(result) => RequestOutcome::Success(result),
        None => {
            log::warn!("response for {} parsed but failed shape validation", ticker);
            RequestOutcome::DomainError(UI_TEXT.err_malformed.to_string())
        }
    }
}

// An empty error string is treated as no error at all.
fn domain_error_message(value: &serde_json::Value) -> Option<String> {
    match value.get("error").and_then(serde_json::Value::as_str) {
        Some(message) if !message.is_empty() => Some(message.to_string()),
        _ => None,
    }
}

fn build_result(value: serde_json::Value) -> Option<PredictionResult> {
    let body: QuoteBody = serde_json::from_value(value).ok()?;

    let chart = body.chart?;
    let labels = chart.labels?;
    let values = chart.values?;
    if labels.len() != values.len() {
        return None;
    }

    let ticker = TickerSymbol::parse(&body.ticker?).ok()?;
    let recommendation = Recommendation::from_str(body.recommendation.as_deref()?).ok()?;

    Some(PredictionResult {
        ticker,
        currency: body.currency?,
        current_price: body.current_price?,
        predicted_price: body.predicted_price?,
        sma10: body.sma10?,
        sma50: body.sma50?,
        rsi14: body.rsi14?,
        recommendation,
        chart: ChartSeries { labels, values },
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::data::http::HttpError,
        async_trait::async_trait,
        std::sync::Mutex,
    };

    const GOOD_BODY: &str = r#"{
        "ticker": "AAPL",
        "currency": "$",
        "current_price": 189.91,
        "predicted_price": 192.34,
        "sma10": 188.20,
        "sma50": 181.75,
        "rsi14": 62.41,
        "recommendation": "BUY",
        "chart": {
            "labels": ["2024-01-02", "2024-01-03", "2024-01-04"],
            "values": [185.64, 184.25, 181.91]
        }
    }"#;

    struct RecordingHttpClient {
        response: Result<HttpResponse, HttpError>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingHttpClient {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                response: Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(detail: &str) -> Self {
            Self {
                response: Err(HttpError::new(detail)),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn recorded_requests(&self) -> Vec<HttpRequest> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .clone()
        }
    }

    #[async_trait]
    impl HttpClient for RecordingHttpClient {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .push(request);
            self.response.clone()
        }
    }

    fn client_over(http: Arc<RecordingHttpClient>) -> QuoteClient {
        QuoteClient::new(http, "http://127.0.0.1:5000")
    }

    fn ticker(raw: &str) -> TickerSymbol {
        TickerSymbol::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn query_value_decodes_back_to_the_normalized_ticker() {
        let http = Arc::new(RecordingHttpClient::replying(200, GOOD_BODY));
        let client = client_over(http.clone());

        client.fetch_prediction(&ticker(" a&b c ")).await;

        let requests = http.recorded_requests();
        assert_eq!(requests.len(), 1);
        let (base, query) = requests[0].url.split_once("?ticker=").unwrap();
        assert_eq!(base, "http://127.0.0.1:5000/api/quote");
        assert_eq!(urlencoding::decode(query).unwrap(), "A&B C");
    }

    #[tokio::test]
    async fn transport_failure_is_a_generic_network_error() {
        let http = Arc::new(RecordingHttpClient::failing(
            "connection failed: tcp connect error: Connection refused",
        ));
        let client = client_over(http);

        let outcome = client.fetch_prediction(&ticker("AAPL")).await;

        match outcome {
            RequestOutcome::NetworkError(message) => {
                assert_eq!(message, UI_TEXT.err_network);
                assert!(!message.contains("Connection refused"));
            }
            other => panic!("expected NetworkError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn bare_server_failure_is_a_server_error() {
        let http = Arc::new(RecordingHttpClient::replying(500, ""));
        let client = client_over(http);

        let outcome = client.fetch_prediction(&ticker("AAPL")).await;

        assert_eq!(
            outcome,
            RequestOutcome::NetworkError(UI_TEXT.err_server.to_string())
        );
    }

    #[tokio::test]
    async fn error_status_with_html_body_is_a_server_error() {
        let http = Arc::new(RecordingHttpClient::replying(
            502,
            "<html><body>Bad Gateway</body></html>",
        ));
        let client = client_over(http);

        let outcome = client.fetch_prediction(&ticker("AAPL")).await;

        assert_eq!(
            outcome,
            RequestOutcome::NetworkError(UI_TEXT.err_server.to_string())
        );
    }

    #[tokio::test]
    async fn structured_error_body_beats_the_status_code() {
        let http = Arc::new(RecordingHttpClient::replying(
            500,
            r#"{"error": "rate limited"}"#,
        ));
        let client = client_over(http);

        let outcome = client.fetch_prediction(&ticker("AAPL")).await;

        assert_eq!(
            outcome,
            RequestOutcome::DomainError("rate limited".to_string())
        );
    }

    #[tokio::test]
    async fn domain_error_with_success_status_is_still_an_error() {
        let http = Arc::new(RecordingHttpClient::replying(
            200,
            r#"{"error": "unknown ticker"}"#,
        ));
        let client = client_over(http);

        let outcome = client.fetch_prediction(&ticker("ZZZZZQ")).await;

        assert_eq!(
            outcome,
            RequestOutcome::DomainError("unknown ticker".to_string())
        );
    }

    #[tokio::test]
    async fn empty_error_string_does_not_mask_a_good_payload() {
        let body = GOOD_BODY.replacen('{', r#"{ "error": "", "#, 1);
        let http = Arc::new(RecordingHttpClient::replying(200, &body));
        let client = client_over(http);

        let outcome = client.fetch_prediction(&ticker("AAPL")).await;

        assert!(matches!(outcome, RequestOutcome::Success(_)));
    }

    #[tokio::test]
    async fn valid_payload_becomes_a_prediction_result() {
        let http = Arc::new(RecordingHttpClient::replying(200, GOOD_BODY));
        let client = client_over(http);

        let outcome = client.fetch_prediction(&ticker("aapl")).await;

        let RequestOutcome::Success(result) = outcome else {
            panic!("expected Success, got {:?}", outcome);
        };
        assert_eq!(result.ticker.as_str(), "AAPL");
        assert_eq!(result.currency, "$");
        assert_eq!(result.current_price, 189.91);
        assert_eq!(result.predicted_price, 192.34);
        assert_eq!(result.rsi14, 62.41);
        assert_eq!(result.recommendation, Recommendation::Buy);
        assert_eq!(result.chart.labels.len(), 3);
        assert_eq!(result.chart.values, vec![185.64, 184.25, 181.91]);
    }

    #[tokio::test]
    async fn mismatched_chart_lengths_are_malformed() {
        let http = Arc::new(RecordingHttpClient::replying(
            200,
            r#"{
                "ticker": "AAPL", "currency": "$",
                "current_price": 1.0, "predicted_price": 2.0,
                "sma10": 1.0, "sma50": 1.0, "rsi14": 50.0,
                "recommendation": "HOLD",
                "chart": {"labels": ["D1", "D2", "D3"], "values": [1.0, 2.0]}
            }"#,
        ));
        let client = client_over(http);

        let outcome = client.fetch_prediction(&ticker("AAPL")).await;

        assert_eq!(
            outcome,
            RequestOutcome::DomainError(UI_TEXT.err_malformed.to_string())
        );
    }

    #[tokio::test]
    async fn missing_numeric_field_is_malformed() {
        let body = GOOD_BODY.replace(r#""rsi14": 62.41,"#, "");
        let http = Arc::new(RecordingHttpClient::replying(200, &body));
        let client = client_over(http);

        let outcome = client.fetch_prediction(&ticker("AAPL")).await;

        assert_eq!(
            outcome,
            RequestOutcome::DomainError(UI_TEXT.err_malformed.to_string())
        );
    }

    #[tokio::test]
    async fn unknown_recommendation_is_malformed_not_a_parse_abort() {
        let body = GOOD_BODY.replace(r#""BUY""#, r#""STRONG BUY""#);
        let http = Arc::new(RecordingHttpClient::replying(200, &body));
        let client = client_over(http);

        let outcome = client.fetch_prediction(&ticker("AAPL")).await;

        assert_eq!(
            outcome,
            RequestOutcome::DomainError(UI_TEXT.err_malformed.to_string())
        );
    }

    #[tokio::test]
    async fn non_json_body_on_success_status_is_an_invalid_response() {
        let http = Arc::new(RecordingHttpClient::replying(
            200,
            "<html>proxy intercepted</html>",
        ));
        let client = client_over(http);

        let outcome = client.fetch_prediction(&ticker("AAPL")).await;

        assert_eq!(
            outcome,
            RequestOutcome::NetworkError(UI_TEXT.err_invalid_response.to_string())
        );
    }
}
