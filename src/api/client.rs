use super::{ApiError, ApiResult, RequestContext, GENERIC_ERROR_MESSAGE};
use crate::libs::config::Config;
use anyhow::Result;
use reqwest::{header, Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Thin JSON client over the backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client for the base URL and timeout resolved from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(config.base_url(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, ctx: &RequestContext, path: &str) -> ApiResult<T> {
        self.execute(ctx, Method::GET, path, |request| request).await
    }

    pub async fn get_query<T, Q>(&self, ctx: &RequestContext, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(ctx, Method::GET, path, |request| request.query(query)).await
    }

    pub async fn post<T, B>(&self, ctx: &RequestContext, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(ctx, Method::POST, path, |request| request.json(body)).await
    }

    pub async fn put<T, B>(&self, ctx: &RequestContext, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(ctx, Method::PUT, path, |request| request.json(body)).await
    }

    pub async fn patch<T, B>(&self, ctx: &RequestContext, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(ctx, Method::PATCH, path, |request| request.json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, ctx: &RequestContext, path: &str) -> ApiResult<T> {
        self.execute(ctx, Method::DELETE, path, |request| request).await
    }

    pub async fn delete_with<T, B>(&self, ctx: &RequestContext, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(ctx, Method::DELETE, path, |request| request.json(body)).await
    }

    async fn execute<T, F>(&self, ctx: &RequestContext, method: Method, path: &str, build: F) -> ApiResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let mut request = self
            .client
            .request(method.clone(), self.url(path))
            .header(header::ACCEPT, "application/json");
        if let Some(token) = ctx.token() {
            request = request.bearer_auth(token);
        }

        let response = build(request).send().await?;
        let status = response.status();
        tracing::debug!(%method, path, status = status.as_u16(), "api request");

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        // Empty bodies decode as `null` so unit-like responses still work
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_server_text() {
        assert_eq!(error_message(r#"{"message":"The date field is required."}"#), "The date field is required.");
    }

    #[test]
    fn error_message_falls_back() {
        assert_eq!(error_message("<html>502</html>"), GENERIC_ERROR_MESSAGE);
        assert_eq!(error_message(r#"{"message":""}"#), GENERIC_ERROR_MESSAGE);
        assert_eq!(error_message(r#"{"errors":{}}"#), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost/api/");
        assert_eq!(client.url("/users/3"), "http://localhost/api/users/3");
        assert_eq!(client.url("users"), "http://localhost/api/users");
    }
}
