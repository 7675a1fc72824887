//! Main AdminClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::TokenProvider;
use crate::error::ApiError;
use crate::error::Error;

/// The main client for the Treetracker admin REST APIs.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks safely.
///
/// # Example
///
/// ```ignore
/// use admin_lib::AdminClient;
/// use admin_lib::auth::StaticTokenProvider;
///
/// let provider = StaticTokenProvider::new("my-session-token");
/// let client = AdminClient::builder()
///     .url("https://admin.example.org/api")
///     .token_provider(provider)
///     .build();
///
/// let species = client.list_species().await?;
/// ```
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    base_url: String,
    token_provider: Arc<dyn TokenProvider>,
    http_client: Client,
    timeout: Option<Duration>,
}

impl AdminClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> AdminClientBuilder<Missing, Missing> {
        AdminClientBuilder::new()
    }

    /// Returns the base URL of the admin API.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.inner.base_url.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|_| ApiError::InvalidUrl(raw))
    }

    /// Sends a GET request with the given query parameters and parses the
    /// JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, Error> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut().extend_pairs(query);

        let token = self.inner.token_provider.get_token().await?;
        let mut request = self
            .inner
            .http_client
            .get(url)
            .header("Authorization", token.value());
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        Self::parse_response(response).await
    }

    /// Sends a POST request with a JSON body and parses the JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.endpoint(path)?;

        let token = self.inner.token_provider.get_token().await?;
        let mut request = self
            .inner
            .http_client
            .post(url)
            .header("Authorization", token.value())
            .json(body);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        Self::parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            return Err(ApiError::http(status.as_u16(), body).into());
        }

        serde_json::from_str(&body)
            .map_err(|err| ApiError::parse_with_body(err.to_string(), body).into())
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`AdminClient`].
///
/// Uses the typestate pattern to ensure required fields are set at compile
/// time.
///
/// # Required Fields
///
/// - `url` - The admin API root URL
/// - `token_provider` - A [`TokenProvider`] implementation
pub struct AdminClientBuilder<UrlState, Provider> {
    url: UrlState,
    token_provider: Provider,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl AdminClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            token_provider: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }
}

impl Default for AdminClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> AdminClientBuilder<Missing, P> {
    /// Sets the admin API root URL.
    pub fn url(self, url: impl Into<String>) -> AdminClientBuilder<Set<String>, P> {
        AdminClientBuilder {
            url: Set(url.into()),
            token_provider: self.token_provider,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U> AdminClientBuilder<U, Missing> {
    /// Sets the token provider used to authorize requests.
    pub fn token_provider<T: TokenProvider + 'static>(
        self,
        provider: T,
    ) -> AdminClientBuilder<U, Set<Arc<dyn TokenProvider>>> {
        AdminClientBuilder {
            url: self.url,
            token_provider: Set(Arc::new(provider) as Arc<dyn TokenProvider>),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U, P> AdminClientBuilder<U, P> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl AdminClientBuilder<Set<String>, Set<Arc<dyn TokenProvider>>> {
    /// Builds the [`AdminClient`].
    ///
    /// This method is only available when both `url` and `token_provider`
    /// have been set.
    pub fn build(self) -> AdminClient {
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        AdminClient {
            inner: Arc::new(AdminClientInner {
                base_url: self.url.0,
                token_provider: self.token_provider.0,
                http_client,
                timeout: self.timeout,
            }),
        }
    }
}
