//! Errors reported by the client core.
//!
//! Every fallible operation returns [`MindnestResult`]. The
//! [`ErrorCategory`] of a [`MindnestError`] tells the front end whether to
//! show an alert or quietly fall back:
//!
//! | Category | Cause | Shown as |
//! |----------|-------|----------|
//! | Network | no answer, timeout | fallback |
//! | Server | 5xx | fallback |
//! | Auth | 401/403 | alert |
//! | User | bad input, other 4xx | alert |
//! | System | local storage | log line |
//! | Client | undecodable answer | alert |
//!
//! ```ignore
//! match session.login("me@example.com", "secret").await {
//!     Ok(user) => println!("Welcome back, {}", user.name.unwrap_or_default()),
//!     Err(err) => eprintln!("{}", err.user_message()),
//! }
//! ```

mod category;
mod mindnest_error;
mod network;
mod result;
mod validation;

pub use crate::traits::StorageError;
pub use category::ErrorCategory;
pub use mindnest_error::MindnestError;
pub use network::NetworkError;
pub use result::{MindnestResult, ResultExt};
pub use validation::{check_new_password, require_filled, ValidationError, MIN_PASSWORD_LENGTH};
