/// Where the prediction backend lives and how we identify ourselves to it.
pub struct EndpointConfig {
    /// Base URL of the prediction service. Overridable at startup with
    /// `--endpoint`; the default matches the backend's dev-server address.
    pub base_url: &'static str,
    /// Route serving the prediction payload.
    pub quote_path: &'static str,
    pub user_agent: &'static str,
}

pub const ENDPOINT: EndpointConfig = EndpointConfig {
    base_url: "http://127.0.0.1:5000",
    quote_path: "/api/quote",
    user_agent: "stock-scope/0.1",
};
