//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileStorage`] - JSON-file key-value storage
//!
//! The [`mock`] submodule provides the test doubles.

pub mod file_storage;
pub mod mock;
pub mod reqwest_http;

pub use file_storage::FileStorage;
pub use mock::{InMemoryStorage, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
