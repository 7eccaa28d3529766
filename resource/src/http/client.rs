//! HTTP client implementation

use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::errors::ResourceError;
use crate::models::request::Source;

/// How requests authenticate against Marathon
#[derive(Debug, Default)]
pub enum Credentials {
    #[default]
    Anonymous,
    Basic {
        user_name: String,
        password: SecretString,
    },
    /// DC/OS ACS token
    Token(SecretString),
}

/// HTTP client for the Marathon REST API
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, ResourceError> {
        let base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ResourceError::ConfigError(format!(
                "unsupported scheme in uri: {}",
                base_url.scheme()
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// Create a client from the resource source configuration.
    ///
    /// An API token wins over basic auth when both are configured.
    pub fn from_source(source: &Source) -> Result<Self, ResourceError> {
        if source.uri.is_empty() {
            return Err(ResourceError::ConfigError("source.uri is required".to_string()));
        }

        let credentials = match (&source.api_token, &source.basic_auth) {
            (Some(token), _) => {
                Credentials::Token(SecretString::from(token.expose_secret().to_owned()))
            }
            (None, Some(auth)) => Credentials::Basic {
                user_name: auth.user_name.clone(),
                password: SecretString::from(auth.password.expose_secret().to_owned()),
            },
            (None, None) => Credentials::Anonymous,
        };

        Self::new(
            &source.uri,
            credentials,
            Duration::from_secs(source.request_timeout_secs),
        )
    }

    /// Append percent-encoded path segments to the base URL
    pub fn api_url(&self, segments: &[&str]) -> Result<Url, ResourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ResourceError::ConfigError(format!("uri cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Start an authenticated request to the API path made of `segments`
    pub fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, ResourceError> {
        let url = self.api_url(segments)?;
        let request = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");

        Ok(match &self.credentials {
            Credentials::Anonymous => request,
            Credentials::Basic {
                user_name,
                password,
            } => request.basic_auth(user_name, Some(password.expose_secret())),
            Credentials::Token(token) => request.header(
                header::AUTHORIZATION,
                format!("token={}", token.expose_secret()),
            ),
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ResourceError> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{} {}", method, url);

        let response = self.client.execute(request).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("HTTP {} {} failed: {} - {}", method, url, status, body);
            return Err(ResourceError::ApiError(format!("{}: {}", status, body)));
        }

        Ok(response)
    }

    /// Send a request and decode the JSON response
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ResourceError> {
        let response = self.send(request).await?;
        let body = response.json().await?;
        Ok(body)
    }

    /// Send a request, discarding the response body
    pub async fn send_empty(&self, request: RequestBuilder) -> Result<(), ResourceError> {
        self.send(request).await?;
        Ok(())
    }
}
