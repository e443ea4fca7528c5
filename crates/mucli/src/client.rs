//! Blocking HTTP transport for catalog commands.

use mucli_core::{CatalogEntry, Method};
use reqwest::{
    StatusCode, Url,
    blocking::Client,
    header::{ACCEPT, COOKIE},
};

use crate::{
    config::Config,
    flags::{CallArgs, fill_path},
};

/// Media types the API answers with.
pub const ACCEPT_VALUE: &str = "application/json, application/xml";

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to create HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("{method} {url} failed")]
    Send {
        method: &'static str,
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body")]
    Read(#[source] reqwest::Error),
}

/// A received response. Non-success statuses are not errors at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Sends catalog commands to the configured API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, RequestError> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("mucli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RequestError::Client)?;
        Ok(Self {
            http,
            base_url,
            token: config.token.clone(),
        })
    }

    /// Sends the request of `entry` with the parsed `call` arguments.
    ///
    /// The bearer token is attached only when the command requires authentication.
    pub fn execute(&self, entry: &CatalogEntry, call: &CallArgs) -> Result<ApiResponse, RequestError> {
        let url = build_url(&self.base_url, &fill_path(&entry.path, &call.path), &call.query)?;
        let method = entry.method.as_str();

        let mut request = self
            .http
            .request(http_method(entry.method), url.clone())
            .header(ACCEPT, ACCEPT_VALUE);
        for (name, value) in &call.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if !call.cookies.is_empty() {
            let cookies = call
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            request = request.header(COOKIE, cookies);
        }
        if let Some(body) = &call.body {
            request = request.json(body);
        }
        match (&self.token, entry.help.auth_required) {
            (Some(token), true) => request = request.bearer_auth(token),
            (None, true) => {
                tracing::warn!(command = %entry.operation_id, "command requires authentication but no token is configured");
            }
            _ => {}
        }

        tracing::info!(method, %url, "sending request");
        let response = request
            .send()
            .map_err(|source| RequestError::Send { method, url, source })?;
        let status = response.status();
        let body = response.bytes().map_err(RequestError::Read)?.to_vec();
        tracing::debug!(%status, bytes = body.len(), "received response");
        Ok(ApiResponse { status, body })
    }
}

/// Parses the base URL, adding the trailing slash that relative joins need to keep
/// its last segment (`.../v1` would otherwise be replaced).
pub fn parse_base_url(base_url: &str) -> Result<Url, RequestError> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };
    Url::parse(&normalized).map_err(|err| RequestError::InvalidUrl {
        url: base_url.to_string(),
        reason: err.to_string(),
    })
}

/// Joins a filled path template onto the base URL and appends the query pairs.
pub fn build_url(base: &Url, path: &str, query: &[(String, String)]) -> Result<Url, RequestError> {
    let mut url = base
        .join(path.trim_start_matches('/'))
        .map_err(|err| RequestError::InvalidUrl {
            url: format!("{base}{path}"),
            reason: err.to_string(),
        })?;
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(name, value)| (name.as_str(), value.as_str())));
    }
    Ok(url)
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Put => reqwest::Method::PUT,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
        Method::Options => reqwest::Method::OPTIONS,
        Method::Head => reqwest::Method::HEAD,
        Method::Patch => reqwest::Method::PATCH,
        Method::Trace => reqwest::Method::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_keeps_base_path_and_encodes_query() {
        //* Given
        let base = parse_base_url("https://api.mangaupdates.com/v1").expect("valid base URL");
        let query = vec![
            ("partial".to_string(), "true".to_string()),
            ("q".to_string(), "one piece".to_string()),
        ];

        //* When
        let url = build_url(&base, "/series/42", &query).expect("valid URL");

        //* Then
        assert_eq!(
            url.as_str(),
            "https://api.mangaupdates.com/v1/series/42?partial=true&q=one+piece"
        );
    }

    #[test]
    fn build_url_without_query_has_no_question_mark() {
        //* Given
        let base = parse_base_url("http://localhost:8080/v1/").expect("valid base URL");

        //* When
        let url = build_url(&base, "/genres", &[]).expect("valid URL");

        //* Then
        assert_eq!(url.as_str(), "http://localhost:8080/v1/genres");
    }

    #[test]
    fn parse_base_url_with_garbage_fails() {
        //* When
        let result = parse_base_url("not a url");

        //* Then
        assert!(matches!(result, Err(RequestError::InvalidUrl { .. })));
    }

    #[test]
    fn http_method_maps_every_method() {
        //* Then
        for method in Method::ALL {
            assert_eq!(http_method(method).as_str(), method.as_str());
        }
    }
}
