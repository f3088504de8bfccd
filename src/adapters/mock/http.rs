//! Recording HTTP transport for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{HttpClient, HttpError, Method, Request, Response};

/// What a stubbed route answers.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// An answer with any status
    Reply(Response),
    /// A transport failure
    Error(HttpError),
}

impl MockResponse {
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Reply(Response::from_json(status, &value))
    }
}

#[derive(Debug, Clone)]
struct Route {
    method: Option<Method>,
    url: String,
    response: MockResponse,
}

impl Route {
    /// Method-bound routes match the URL exactly; method-free routes also
    /// match URLs they prefix, so a query string can be left out.
    fn matches(&self, request: &Request) -> bool {
        match self.method {
            Some(method) => method == request.method && self.url == request.url,
            None => request.url.starts_with(&self.url),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    routes: Vec<Route>,
    fallback: Option<MockResponse>,
    received: Vec<Request>,
}

/// In-memory [`HttpClient`] that answers from stubbed routes and keeps
/// every request it was sent.
///
/// Method-bound routes win over method-free ones; later stubs for the same
/// route replace earlier ones. Unmatched requests get the default response,
/// or a transport error when none is set.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_method_response("GET", "http://api.test/chat/history", MockResponse::json(200, json!([])));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn stub(&self, method: Option<Method>, url: &str, response: MockResponse) {
        let mut state = self.state();
        state
            .routes
            .retain(|route| !(route.method == method && route.url == url));
        state.routes.push(Route {
            method,
            url: url.to_string(),
            response,
        });
    }

    /// Answer `url` (or URLs it prefixes) for any method.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.stub(None, url, response);
    }

    /// Answer exactly `method url`.
    ///
    /// # Panics
    ///
    /// If `method` is not one of `GET`, `POST`, `PUT`, `DELETE`.
    pub fn set_method_response(&self, method: &str, url: &str, response: MockResponse) {
        let method = Method::parse(method).unwrap_or_else(|| panic!("unknown method {}", method));
        self.stub(Some(method), url, response);
    }

    pub fn set_default_response(&self, response: MockResponse) {
        self.state().fallback = Some(response);
    }

    /// Requests received so far, oldest first.
    pub fn get_requests(&self) -> Vec<Request> {
        self.state().received.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state().received.len()
    }

    pub fn clear_requests(&self) {
        self.state().received.clear();
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        let mut state = self.state();
        let exact = state
            .routes
            .iter()
            .find(|route| route.method.is_some() && route.matches(&request));
        let any_method = || {
            state
                .routes
                .iter()
                .find(|route| route.method.is_none() && route.matches(&request))
        };
        let answer = exact
            .or_else(any_method)
            .map(|route| route.response.clone())
            .or_else(|| state.fallback.clone());

        let label = format!("{} {}", request.method, request.url);
        state.received.push(request);

        match answer {
            Some(MockResponse::Reply(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no stub for {}", label))),
        }
    }
}
