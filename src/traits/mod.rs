//! Seams between the client core and the outside world.
//!
//! - [`HttpClient`] sends a [`Request`] to the backend
//! - [`KeyValueStore`] is the string-keyed local storage

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, Method, Request, Response};
pub use storage::{KeyValueStore, StorageError};
