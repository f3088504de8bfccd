//! [`HttpClient`] over reqwest.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{HttpClient, HttpError, Method, Request, Response};

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        let text = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(text)
        } else if err.is_connect() {
            HttpError::Connect(text)
        } else if err.is_builder() {
            HttpError::Url(text)
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(text)
        } else {
            HttpError::Other(text)
        }
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Sends requests with a shared `reqwest::Client`, so connections are pooled
/// across calls.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// A client whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        let mut builder = self
            .client
            .request(to_reqwest(request.method), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(Response::new(status, body))
    }
}
