//! Request options

use crate::encoding::encode_form;

/// Request payload: ordered form pairs or a raw body string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestData {
    /// Key/value pairs, encoded as a query string for GET and as a form body otherwise
    Form(Vec<(String, String)>),
    /// Pre-encoded data passed through untouched
    Raw(String),
}

impl Default for RequestData {
    fn default() -> Self {
        RequestData::Form(Vec::new())
    }
}

impl RequestData {
    /// No pairs, or an empty raw string
    pub fn is_empty(&self) -> bool {
        match self {
            RequestData::Form(pairs) => pairs.is_empty(),
            RequestData::Raw(body) => body.is_empty(),
        }
    }

    /// Encode for the wire
    pub fn encode(&self) -> String {
        match self {
            RequestData::Form(pairs) => encode_form(pairs),
            RequestData::Raw(body) => body.clone(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RequestData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RequestData::Form(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<String> for RequestData {
    fn from(body: String) -> Self {
        RequestData::Raw(body)
    }
}

impl From<&str> for RequestData {
    fn from(body: &str) -> Self {
        RequestData::Raw(body.to_string())
    }
}

/// Options for a single request
///
/// Defaults: empty `url`, method `GET`, no data, no headers.
///
/// ```
/// use form_http::RequestOptions;
///
/// let options = RequestOptions::new("https://api.example.com/search")
///     .param("q", "rust")
///     .header("Accept: application/json");
///
/// assert_eq!(options.method, "GET");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Target URL
    pub url: String,
    /// Method name, checked case-insensitively at dispatch
    pub method: String,
    /// Query or body data
    pub data: RequestData,
    /// Extra `"Name: Value"` header lines
    pub headers: Vec<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: "GET".to_string(),
            data: RequestData::default(),
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    /// Options for `url` with every other field at its default
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the method name
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Append a form pair
    ///
    /// Replaces raw data, if any, with a fresh set of pairs.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let pair = (key.into(), value.into());
        match &mut self.data {
            RequestData::Form(pairs) => pairs.push(pair),
            RequestData::Raw(_) => self.data = RequestData::Form(vec![pair]),
        }
        self
    }

    /// Replace the data with the given pairs
    pub fn params<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.data = pairs.into_iter().collect();
        self
    }

    /// Replace the data with a raw string
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.data = RequestData::Raw(body.into());
        self
    }

    /// Append a `"Name: Value"` header line
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.headers.push(line.into());
        self
    }

    /// Append several header lines
    pub fn headers<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(lines.into_iter().map(Into::into));
        self
    }
}
