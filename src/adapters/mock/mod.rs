//! Test doubles for the traits in `crate::traits`.
//!
//! - [`MockHttpClient`] answers from stubbed routes and records requests
//! - [`InMemoryStorage`] keeps values in a map and can be told to fail

pub mod http;
pub mod storage;

pub use http::{MockHttpClient, MockResponse};
pub use storage::InMemoryStorage;
