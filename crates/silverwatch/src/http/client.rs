//! HTTP client and request descriptor.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use crate::auth::AccessToken;
use crate::error::{ApiError, Error};
use crate::types::ServerUrl;

/// A description of an outbound API call.
///
/// The descriptor owns everything needed to issue the call, so a request
/// that fails with 401 can be re-sent unchanged once a fresh token is
/// available.
#[derive(Debug, Clone)]
pub(crate) struct Request {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body).map_err(|e| {
            Error::Transport(crate::error::TransportError::Http {
                message: format!("failed to serialize request body: {e}"),
            })
        })?);
        Ok(self)
    }
}

/// HTTP client for backend API requests.
///
/// Holds the single shared `reqwest::Client`; the cookie store is enabled
/// so the server-side refresh cookie accompanies the refresh call.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    server: ServerUrl,
}

impl HttpClient {
    /// Create a new client for the given server.
    pub fn new(server: ServerUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("silverwatch/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .build()
            .expect("failed to build HTTP client");

        Self { client, server }
    }

    /// Returns the server URL this client is configured for.
    pub fn server(&self) -> &ServerUrl {
        &self.server
    }

    /// Send a request and deserialize the JSON response body.
    #[instrument(skip(self, token), fields(server = %self.server, method = %request.method, path = %request.path))]
    pub async fn send<R>(&self, request: &Request, token: Option<&AccessToken>) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let response = self.dispatch(request, token).await?;
        self.handle_response(response).await
    }

    /// Send a request whose success response carries no useful body.
    #[instrument(skip(self, token), fields(server = %self.server, method = %request.method, path = %request.path))]
    pub async fn send_no_content(
        &self,
        request: &Request,
        token: Option<&AccessToken>,
    ) -> Result<(), Error> {
        let response = self.dispatch(request, token).await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    async fn dispatch(
        &self,
        request: &Request,
        token: Option<&AccessToken>,
    ) -> Result<reqwest::Response, Error> {
        let url = self.server.endpoint(&request.path);
        debug!("API request");
        trace!(query = ?request.query, "query parameters");

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(self.base_headers(token));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }

    /// Create headers for a request, attaching the bearer token if present.
    fn base_headers(&self, token: Option<&AccessToken>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            let auth_value = format!("Bearer {}", token.as_str());
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth_value).expect("invalid token characters"),
            );
        }
        headers
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    /// Parse an error response body into its tagged shape.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        match response.bytes().await {
            Ok(bytes) => ApiError::parse_body(status, &bytes),
            Err(_) => ApiError::new(status, crate::error::ErrorBody::Empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let server = ServerUrl::new("https://api.silverwatch.example").unwrap();
        let client = HttpClient::new(server.clone());
        assert_eq!(client.server().as_str(), server.as_str());
    }

    #[test]
    fn request_descriptor_is_resendable() {
        let req = Request::get("/api/users/")
            .with_query(vec![("page".to_string(), "1".to_string())]);
        let clone = req.clone();
        assert_eq!(clone.path, "/api/users/");
        assert_eq!(clone.query, req.query);
    }
}
