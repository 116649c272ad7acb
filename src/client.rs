//! MaveDB API client.
//!
//! Low-level HTTP client that handles authorization and raw requests.
//! Model instances are exchanged as untyped JSON; the remote service is
//! authoritative for validation.

use std::env;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{MaveError, Result};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("mavetools/", env!("CARGO_PKG_VERSION"));

/// Environment variable for the API base URL.
pub const ENV_API_URL: &str = "MAVEDB_API_URL";
/// Environment variable for the auth token.
pub const ENV_API_TOKEN: &str = "MAVEDB_API_TOKEN";

/// Header carrying the auth token on POST requests.
const TOKEN_HEADER: &str = "access_token";

/// Low-level MaveDB API client.
///
/// Wraps a base URL and an optional auth token. GET requests are
/// unauthenticated; POST requests require a token and fail with
/// [`MaveError::AuthTokenMissing`] before any network activity if none was
/// configured.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use mavetools::MaveClient;
///
/// # async fn example() -> mavetools::Result<()> {
/// // Create from environment variables
/// let client = MaveClient::from_env()?;
///
/// // Or configure manually
/// let client = MaveClient::builder("https://api.mavedb.org/api/")
///     .token("your-api-token")
///     .build()?;
///
/// let scoreset = client
///     .get_model_instance("scoresets", "urn:mavedb:00000001-a-1")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MaveClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl std::fmt::Debug for MaveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaveClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`MaveClient`].
#[derive(Debug, Clone)]
pub struct MaveClientBuilder {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl MaveClientBuilder {
    /// Set the auth token used for POST requests.
    ///
    /// An empty token is treated as no token at all, so presence checks
    /// stay unambiguous.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.is_empty() { None } else { Some(token) };
        self
    }

    /// Set the request timeout (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<MaveClient> {
        // Ensure base URL ends with / so endpoint concatenation is well-formed
        let base_url_str = if self.base_url.ends_with('/') {
            self.base_url
        } else {
            format!("{}/", self.base_url)
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(self.timeout)
            .build()
            .map_err(MaveError::Http)?;

        Ok(MaveClient {
            http,
            base_url,
            token: self.token,
        })
    }
}

impl MaveClient {
    /// Create a client with no auth token and the default timeout.
    ///
    /// Sufficient for GET requests; POST requests need a token, see
    /// [`MaveClient::builder`].
    pub fn new(base_url: &str) -> Result<Self> {
        Self::builder(base_url).build()
    }

    /// Start building a client for the given base URL.
    pub fn builder(base_url: &str) -> MaveClientBuilder {
        MaveClientBuilder {
            base_url: base_url.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client from environment variables.
    ///
    /// Uses `MAVEDB_API_URL` for the base URL (defaults to
    /// `http://127.0.0.1:8000/api/`, the local development server) and
    /// optionally `MAVEDB_API_TOKEN` for authorization.
    pub fn from_env() -> Result<Self> {
        let base_url = match env::var(ENV_API_URL) {
            Ok(url) => url,
            Err(env::VarError::NotPresent) => DEFAULT_API_URL.to_string(),
            Err(e) => {
                return Err(MaveError::ConfigMissing(format!("{ENV_API_URL}: {e}")));
            }
        };

        let mut builder = Self::builder(&base_url);
        if let Ok(token) = env::var(ENV_API_TOKEN) {
            builder = builder.token(token);
        }
        builder.build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether an auth token was configured.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch a model instance (e.g. an experiment or score set) by ID.
    ///
    /// Issues a GET against `{base_url}{endpoint}/{instance_id}/` and
    /// returns the parsed JSON body. No schema is enforced client-side.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - URL extension beyond the base URL identifying the
    ///   resource collection, e.g. `"experiments"` or `"scoresets"`
    /// * `instance_id` - ID of the instance to retrieve, typically a URN
    ///
    /// # Errors
    ///
    /// Returns [`MaveError::Api`] carrying the status code and the error
    /// detail on a non-success response.
    #[tracing::instrument(skip(self))]
    pub async fn get_model_instance(&self, endpoint: &str, instance_id: &str) -> Result<Value> {
        let url = self.instance_url(endpoint, instance_id)?;

        let response = self.http.get(url).send().await.map_err(MaveError::Http)?;
        let response = Self::check_response(response).await?;

        response.json().await.map_err(MaveError::Http)
    }

    /// Submit a model instance for creation.
    ///
    /// Issues a POST against `{base_url}{endpoint}/` with the instance as
    /// the JSON body and the auth token in the `access_token` header, and
    /// returns the URN assigned to the created resource.
    ///
    /// # Errors
    ///
    /// * [`MaveError::AuthTokenMissing`] if no token was configured; the
    ///   request is never sent.
    /// * [`MaveError::Api`] on a non-success response.
    /// * [`MaveError::MalformedResponse`] if the success response lacks a
    ///   string `urn` field.
    #[tracing::instrument(skip(self, model_instance))]
    pub async fn post_model_instance<B: Serialize + ?Sized>(
        &self,
        model_instance: &B,
        endpoint: &str,
    ) -> Result<String> {
        let Some(token) = &self.token else {
            tracing::error!("auth token required for POST requests");
            return Err(MaveError::AuthTokenMissing);
        };

        let url = self.collection_url(endpoint)?;

        let response = self
            .http
            .post(url)
            .header(TOKEN_HEADER, token.as_str())
            .json(model_instance)
            .send()
            .await
            .map_err(MaveError::Http)?;
        let response = Self::check_response(response).await?;

        tracing::info!(endpoint, "successfully uploaded model instance");

        let body: Value = response.json().await.map_err(MaveError::Http)?;
        body.get("urn")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(MaveError::MalformedResponse { field: "urn" })
    }

    /// URL for a resource collection: `{base_url}{endpoint}/`.
    fn collection_url(&self, endpoint: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{endpoint}/", self.base_url))?)
    }

    /// URL for a single instance: `{base_url}{endpoint}/{instance_id}/`.
    fn instance_url(&self, endpoint: &str, instance_id: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}{endpoint}/{instance_id}/",
            self.base_url
        ))?)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), body = %body, "request failed");

        Err(MaveError::Api {
            status: status.as_u16(),
            message: Self::extract_error_message(&body, status),
        })
    }

    /// Extract an error message from a failed response body.
    fn extract_error_message(body: &str, status: StatusCode) -> String {
        // MaveDB reports errors as {"detail": ...}; fall back on the raw body
        if let Ok(json) = serde_json::from_str::<Value>(body) {
            if let Some(detail) = json.get("detail").and_then(Value::as_str) {
                return detail.to_string();
            }
            if let Some(msg) = json.get("message").and_then(Value::as_str) {
                return msg.to_string();
            }
        }

        if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_url_is_literal_concatenation() {
        let client = MaveClient::new("http://127.0.0.1:8000/api/").unwrap();
        let url = client
            .instance_url("experiments", "urn:mavedb:00000001-a-1")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/experiments/urn:mavedb:00000001-a-1/"
        );
    }

    #[test]
    fn test_collection_url() {
        let client = MaveClient::new("http://127.0.0.1:8000/api/").unwrap();
        let url = client.collection_url("scoresets").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/scoresets/");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = MaveClient::new("https://api.mavedb.org/api").unwrap();
        let client2 = MaveClient::new("https://api.mavedb.org/api/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let client = MaveClient::builder("http://127.0.0.1:8000/api/")
            .token("")
            .build()
            .unwrap();
        assert!(!client.has_token());
    }

    #[test]
    fn test_client_debug_redacts_token() {
        let client = MaveClient::builder("http://127.0.0.1:8000/api/")
            .token("secret-token")
            .build()
            .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("MaveClient"));
        assert!(debug.contains("base_url"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_extract_error_message_prefers_detail() {
        let msg = MaveClient::extract_error_message(
            r#"{"detail": "not found"}"#,
            StatusCode::NOT_FOUND,
        );
        assert_eq!(msg, "not found");
    }

    #[test]
    fn test_extract_error_message_falls_back_to_body() {
        let msg =
            MaveClient::extract_error_message("plain text error", StatusCode::BAD_REQUEST);
        assert_eq!(msg, "plain text error");

        let msg = MaveClient::extract_error_message("", StatusCode::BAD_GATEWAY);
        assert_eq!(msg, "HTTP 502 Bad Gateway");
    }
}
