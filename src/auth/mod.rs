//! Account screens: login session, signup, password recovery and profile.

pub mod profile;
pub mod recovery;
pub mod session;
pub mod signup;

pub use profile::{has_unsaved_changes, ProfileEditor, ProfileSource};
pub use recovery::PasswordRecovery;
pub use session::{LoggedInUser, Session};
pub use signup::{welcome_message, SignupForm, SECURITY_QUESTIONS, SIGNUP_STEPS};
