use std::sync::LazyLock;

pub struct UiText {
    // --- QUERY BAR ---
    pub query_hint: String,
    pub query_button: String,

    // --- CENTER PANEL ---
    pub cp_idle_hint: String,
    pub cp_loading: String,

    // --- RESULTS PANEL ---
    pub label_current_price: String,
    pub label_predicted_price: String,
    pub label_sma10: String,
    pub label_sma50: String,
    pub label_rsi14: String,
    pub label_recommendation: String,

    // --- ERRORS ---
    pub err_network: String,
    pub err_server: String,
    pub err_invalid_response: String,
    pub err_malformed: String,
}

impl UiText {
    pub fn chart_heading(&self, ticker: &str, sessions: usize) -> String {
        format!("{} close (last {} sessions)", ticker, sessions)
    }
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    query_hint: "Enter stock ticker symbol".to_string(),
    query_button: "Predict".to_string(),

    cp_idle_hint: "Enter a ticker above to get a prediction.".to_string(),
    cp_loading: "Fetching prediction...".to_string(),

    label_current_price: "Current Price".to_string(),
    label_predicted_price: "Predicted Price (next day)".to_string(),
    label_sma10: "SMA 10".to_string(),
    label_sma50: "SMA 50".to_string(),
    label_rsi14: "RSI 14".to_string(),
    label_recommendation: "Recommendation".to_string(),

    err_network: "Could not reach the prediction service.".to_string(),
    err_server: "server error".to_string(),
    err_invalid_response: "invalid response".to_string(),
    err_malformed: "malformed response".to_string(),
});
