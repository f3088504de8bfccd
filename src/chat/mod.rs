//! Chat conversation view-model.

mod busy;
mod ids;
mod view_model;

pub use busy::{BusyFlag, BusyGuard};
pub use ids::IdGenerator;
pub use view_model::{
    fallback_text, greeting_text, ChatViewModel, HistoryLoad, HistorySource, SendOutcome,
};
