//! Flutterwave API client and the shared request/normalization path

use crate::error::Result;
use crate::types::{bill_types, currencies, Envelope};
use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{header, redirect, Client, Method};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Production base URL of the provider's v3 API
pub const DEFAULT_BASE_URL: &str = "https://api.flutterwave.com/v3/";

/// Characters escaped when a caller-supplied value lands in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b'+')
    .add(b'&');

/// Immutable client configuration.
///
/// Built once with [`Config::new`] plus the `with_*` builders and never
/// mutated afterwards. Nothing is validated here; bad credentials surface
/// when the provider rejects the first call.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the provider API, always with a trailing slash
    pub base_url: String,
    /// Merchant public key
    pub public_key: String,
    /// Merchant secret key, sent as the bearer token on every request
    pub secret_key: String,
    /// Merchant encryption key
    pub encryption_key: String,
    /// Default settlement currency
    pub currency_code: String,
    /// Webhook callback URL injected into transfer and card requests
    pub webhook_url: String,
    /// Wallet currency debited for transfers and card funding
    pub admin_debit_currency: String,
    /// Name used as the OTP sender and in default transfer narrations
    pub sender_name: String,
    /// Currencies accepted by the currency-checked operations
    pub supported_currencies: Vec<String>,
    /// Recognized bill categories as `(code, label)` pairs
    pub bill_types: Vec<(String, String)>,
}

impl Config {
    /// Create a configuration with the provider defaults
    pub fn new(
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
        encryption_key: impl Into<String>,
        currency_code: impl Into<String>,
        webhook_url: impl Into<String>,
    ) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            public_key: public_key.into(),
            secret_key: secret_key.into(),
            encryption_key: encryption_key.into(),
            currency_code: currency_code.into(),
            webhook_url: webhook_url.into(),
            admin_debit_currency: "NGN".to_string(),
            sender_name: "Flutterwave".to_string(),
            supported_currencies: currencies::SUPPORTED
                .iter()
                .map(|c| c.to_string())
                .collect(),
            bill_types: bill_types::RECOGNIZED
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// Point the client at a different base URL, e.g. a sandbox
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Override the wallet currency debited for transfers and card funding
    pub fn with_admin_debit_currency(mut self, currency: impl Into<String>) -> Self {
        self.admin_debit_currency = currency.into();
        self
    }

    /// Override the OTP sender and narration name
    pub fn with_sender_name(mut self, name: impl Into<String>) -> Self {
        self.sender_name = name.into();
        self
    }

    /// Override the supported-currency table
    pub fn with_supported_currencies<I, S>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_currencies = currencies.into_iter().map(Into::into).collect();
        self
    }

    /// Override the recognized bill-category table
    pub fn with_bill_types<I, C, L>(mut self, bill_types: I) -> Self
    where
        I: IntoIterator<Item = (C, L)>,
        C: Into<String>,
        L: Into<String>,
    {
        self.bill_types = bill_types
            .into_iter()
            .map(|(code, label)| (code.into(), label.into()))
            .collect();
        self
    }
}

/// Client for the Flutterwave v3 API.
///
/// Holds immutable configuration plus one reusable HTTP connection pool; it
/// is cheap to clone and safe to share across tasks. Every operation
/// resolves to an [`Envelope`] unless the transport itself fails.
#[derive(Debug, Clone)]
pub struct Flutterwave {
    config: Config,
    http: Client,
}

impl Flutterwave {
    /// Create a client from configuration
    pub fn new(config: Config) -> Self {
        let http = Client::builder()
            .redirect(redirect::Policy::limited(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { config, http }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn is_supported_currency(&self, code: &str) -> bool {
        self.config.supported_currencies.iter().any(|c| c == code)
    }

    pub(crate) fn is_bill_type(&self, code: &str) -> bool {
        self.config.bill_types.iter().any(|(c, _)| c == code)
    }

    /// Comma-separated list of recognized bill category codes, used in the
    /// bill-type validation message
    pub(crate) fn bill_type_codes(&self) -> String {
        self.config
            .bill_types
            .iter()
            .map(|(code, _)| code.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Execute one request against the provider.
    ///
    /// Adds the JSON content type and bearer authorization, follows at most
    /// 10 redirects, applies no client-side timeout, and never errors on a
    /// non-2xx status; callers interpret the status code themselves.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<RawResponse> {
        let url = Url::parse(&self.config.base_url)?.join(path)?;
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.config.secret_key);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!("request to {} failed: {}", path, e);
            e
        })?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }

    pub(crate) async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<RawResponse> {
        self.request(Method::GET, path, query, None).await
    }

    pub(crate) async fn post(&self, path: &str, body: Value) -> Result<RawResponse> {
        self.request(Method::POST, path, &[], Some(&body)).await
    }

    pub(crate) async fn put(&self, path: &str) -> Result<RawResponse> {
        self.request(Method::PUT, path, &[], None).await
    }
}

/// Status code and raw body of one provider response
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Parse the body as JSON if it is JSON
    pub(crate) fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Fallback message when the provider reports a failure without one
pub(crate) const GENERIC_FAILURE: &str = "Something went wrong";

/// Collapse a provider response into the uniform envelope.
///
/// A 200 status with a `"success"` body maps to a success envelope carrying
/// the body's `message` and `data`; any other status, body status, or an
/// unparseable body maps to a failure envelope with the best message
/// available.
pub(crate) fn normalize(response: RawResponse) -> Envelope {
    let Some(body) = response.json() else {
        return Envelope::failure(format!(
            "Unexpected response from provider (HTTP {})",
            response.status
        ));
    };

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(GENERIC_FAILURE)
        .to_string();

    if response.status == 200 && body.get("status").and_then(Value::as_str) == Some("success") {
        let data = body.get("data").cloned().unwrap_or(Value::Null);
        Envelope::success(message, data)
    } else {
        Envelope::failure(message)
    }
}

/// Strict `YYYY-MM-DD` check; the parsed date must round-trip exactly
pub(crate) fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string() == value)
        .unwrap_or(false)
}

/// Percent-encode a caller-supplied value for use as a path segment
pub(crate) fn encode_path(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(status: u16, body: Value) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new("pk", "sk", "ek", "NGN", "https://example.com/hooks");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.admin_debit_currency, "NGN");
        assert_eq!(config.supported_currencies.len(), currencies::SUPPORTED.len());
        assert_eq!(config.bill_types.len(), bill_types::RECOGNIZED.len());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = Config::new("pk", "sk", "ek", "NGN", "https://example.com/hooks")
            .with_base_url("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080/");
    }

    #[test]
    fn test_currency_table_override() {
        let config = Config::new("pk", "sk", "ek", "USD", "https://example.com/hooks")
            .with_supported_currencies(["USD", "EUR"]);
        let client = Flutterwave::new(config);
        assert!(client.is_supported_currency("USD"));
        assert!(!client.is_supported_currency("NGN"));
    }

    #[test]
    fn test_bill_type_table_override() {
        let config = Config::new("pk", "sk", "ek", "NGN", "https://example.com/hooks")
            .with_bill_types([("airtime", "Airtime"), ("power", "Power")]);
        let client = Flutterwave::new(config);
        assert!(client.is_bill_type("airtime"));
        assert!(!client.is_bill_type("cables"));
        assert_eq!(client.bill_type_codes(), "airtime, power");
    }

    #[test]
    fn test_normalize_success() {
        let envelope = normalize(raw(
            200,
            json!({"status": "success", "message": "Fetched", "data": {"id": 7}}),
        ));
        assert!(envelope.is_success());
        assert_eq!(envelope.message, "Fetched");
        assert_eq!(envelope.data, json!({"id": 7}));
    }

    #[test]
    fn test_normalize_success_without_data() {
        let envelope = normalize(raw(200, json!({"status": "success", "message": "OK"})));
        assert!(envelope.is_success());
        assert_eq!(envelope.data, Value::Null);
    }

    #[test]
    fn test_normalize_failure_body_on_200() {
        let envelope = normalize(raw(
            200,
            json!({"status": "error", "message": "Card not found", "data": null}),
        ));
        assert!(envelope.error);
        assert_eq!(envelope.message, "Card not found");
        assert_eq!(envelope.data, json!([]));
    }

    #[test]
    fn test_normalize_non_200_uses_body_message() {
        let envelope = normalize(raw(
            401,
            json!({"status": "error", "message": "Invalid authorization key"}),
        ));
        assert!(envelope.error);
        assert_eq!(envelope.message, "Invalid authorization key");
    }

    #[test]
    fn test_normalize_non_200_without_message() {
        let envelope = normalize(raw(500, json!({"oops": true})));
        assert!(envelope.error);
        assert_eq!(envelope.message, GENERIC_FAILURE);
    }

    #[test]
    fn test_normalize_unparseable_body() {
        let response = RawResponse {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        let envelope = normalize(response);
        assert!(envelope.error);
        assert_eq!(
            envelope.message,
            "Unexpected response from provider (HTTP 502)"
        );
    }

    #[test]
    fn test_date_validation() {
        assert!(is_valid_date("2024-01-31"));
        assert!(is_valid_date("2020-02-29"));
        assert!(!is_valid_date("2021-02-29"));
        assert!(!is_valid_date("2024-1-31"));
        assert!(!is_valid_date("31-01-2024"));
        assert!(!is_valid_date("2024-01-31T00:00:00"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn test_path_segment_encoding() {
        assert_eq!(encode_path("RND_12345"), "RND_12345");
        assert_eq!(encode_path("+2334948"), "%2B2334948");
        assert_eq!(encode_path("a/b c"), "a%2Fb%20c");
    }
}
