//! Terminal front end over the client core.
//!
//! ```ignore
//! use mindnest::cli::{parse_args, run_cli_command, CliContext};
//!
//! let command = parse_args(std::env::args());
//! run_cli_command(command, &context).await?;
//! ```

pub mod args;
pub mod output;
pub mod version;

pub use args::{parse_args, CliCommand, PreferenceArg, USAGE};
pub use version::{version_line, VERSION};

use chrono::{Local, Utc};
use color_eyre::eyre::{eyre, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::api::ApiClient;
use crate::auth::Session;
use crate::chat::{ChatViewModel, HistorySource, SendOutcome};
use crate::error::MindnestError;
use crate::models::{Language, Mood, MoodReason};
use crate::preferences::SharedPreferences;
use crate::resources;
use crate::wellbeing::MoodJournal;
use output::icons;

/// Shared handles the commands run against.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub api: ApiClient,
    pub preferences: SharedPreferences,
}

/// Turn a core error into a report carrying the message a user should see.
fn report(error: MindnestError) -> color_eyre::Report {
    eyre!(
        "{} ({})",
        error.user_message(),
        error.category().recovery_hint()
    )
}

/// Run a command that needs neither storage nor the network.
///
/// # Returns
///
/// * `None` - The command needs a [`CliContext`]
/// * `Some(result)` - The command ran
pub fn run_offline_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(reason) => {
            eprintln!("{}", USAGE);
            Some(Err(eyre!("{}", reason)))
        }
        _ => None,
    }
}

/// Run a parsed command to completion.
pub async fn run_cli_command(command: CliCommand, ctx: &CliContext) -> Result<()> {
    if let Some(result) = run_offline_command(&command) {
        return result;
    }
    match command {
        CliCommand::Version | CliCommand::Help | CliCommand::Invalid(_) => Ok(()),
        CliCommand::Chat { text } => run_chat(ctx, text).await,
        CliCommand::History => run_history(ctx).await,
        CliCommand::Login { email, password } => {
            let user = Session::new(ctx.api.clone())
                .login(&email, &password)
                .await
                .map_err(report)?;
            let name = user.name.unwrap_or(user.user_id);
            output::print_status(icons::SUCCESS, &format!("Logged in as {}", name));
            Ok(())
        }
        CliCommand::Logout => {
            Session::new(ctx.api.clone()).logout().await?;
            output::print_status(icons::SUCCESS, "Logged out");
            Ok(())
        }
        CliCommand::Resources => {
            let language = ctx.preferences.read().await.language();
            let items = resources::fetch_or_empty(&ctx.api, language).await;
            if items.is_empty() {
                output::print_status(icons::WARNING, "No resources available right now");
            } else {
                output::print_lines(&output::render_resources(&items));
            }
            Ok(())
        }
        CliCommand::Theme(arg) => {
            let mut prefs = ctx.preferences.write().await;
            match arg {
                PreferenceArg::Show => {}
                PreferenceArg::Set(theme) => prefs.set_theme(theme).await?,
                PreferenceArg::Toggle => prefs.toggle_theme().await?,
            }
            println!("{}", output::render_theme(prefs.theme()));
            Ok(())
        }
        CliCommand::Language(arg) => {
            let mut prefs = ctx.preferences.write().await;
            match arg {
                PreferenceArg::Show => {}
                PreferenceArg::Set(language) => prefs.set_language(language).await?,
                PreferenceArg::Toggle => prefs.toggle_language().await?,
            }
            println!("{}", prefs.language().code());
            Ok(())
        }
        CliCommand::Mood { mood, reason, note } => run_mood(ctx, mood, reason, &note).await,
    }
}

async fn chat_view_model(ctx: &CliContext) -> (ChatViewModel, Language) {
    let language = ctx.preferences.read().await.language();
    let mut chat = ChatViewModel::new(ctx.api.clone()).with_language(language);
    let load = chat.load_history().await;
    if load.source == HistorySource::Cache {
        output::print_status(icons::WARNING, "Offline: showing the saved conversation");
    }
    (chat, language)
}

fn print_outcome(outcome: SendOutcome, language: Language) {
    match outcome {
        SendOutcome::Ignored => {}
        SendOutcome::Replied(message) => {
            output::print_lines(&output::render_message(&message, language));
        }
        SendOutcome::Fallback { error } => {
            debug!(code = error.error_code(), "Chat request failed");
            if error.category().degrades_silently() {
                output::print_status(icons::FAILURE, crate::chat::fallback_text(language));
            } else {
                output::print_status(icons::FAILURE, &error.user_message());
            }
        }
    }
}

async fn run_chat(ctx: &CliContext, text: Option<String>) -> Result<()> {
    let (mut chat, language) = chat_view_model(ctx).await;

    if let Some(text) = text {
        print_outcome(chat.send_message(&text).await, language);
        return Ok(());
    }

    let today = Local::now().date_naive();
    output::print_lines(&output::render_display_items(chat.display_items(today), language));
    println!("(type a message, or /quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == "/quit" || line == "/exit" {
            break;
        }
        print_outcome(chat.send_message(line).await, language);
    }
    Ok(())
}

async fn run_history(ctx: &CliContext) -> Result<()> {
    let (mut chat, language) = chat_view_model(ctx).await;
    let today = Local::now().date_naive();
    output::print_lines(&output::render_display_items(chat.display_items(today), language));
    Ok(())
}

async fn run_mood(ctx: &CliContext, mood: Mood, reason: MoodReason, note: &str) -> Result<()> {
    let language = ctx.preferences.read().await.language();
    let mut journal = MoodJournal::load(ctx.api.store().clone()).await;
    let entry = journal
        .check_in(Some(mood), Some(reason), note, Utc::now())
        .await
        .map_err(report)?;

    output::print_status(
        icons::SUCCESS,
        &format!(
            "{} {} · {}",
            entry.mood.emoji(),
            entry.mood.label(language),
            entry.reason.label(language)
        ),
    );
    output::print_header("Last 7 days");
    let chart = journal.weekly_chart(entry.date_key);
    output::print_lines(&output::render_mood_chart(&chart, journal.entries()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStorage, MockHttpClient, MockResponse};
    use crate::preferences::{Preferences, ThemeScheme};
    use serde_json::json;
    use std::sync::Arc;

    fn context(store: InMemoryStorage) -> (CliContext, Arc<MockHttpClient>) {
        let http = Arc::new(MockHttpClient::new());
        let store: Arc<dyn crate::traits::KeyValueStore> = Arc::new(store);
        let api = ApiClient::new(http.clone(), store.clone(), "http://api.test");
        let preferences = Preferences::new(store).shared();
        (CliContext { api, preferences }, http)
    }

    #[test]
    fn test_offline_commands() {
        assert!(run_offline_command(&CliCommand::Version).unwrap().is_ok());
        assert!(run_offline_command(&CliCommand::Invalid("x".to_string()))
            .unwrap()
            .is_err());
        assert!(run_offline_command(&CliCommand::History).is_none());
    }

    #[tokio::test]
    async fn test_invalid_command_is_error() {
        let (ctx, http) = context(InMemoryStorage::new());
        let result = run_cli_command(CliCommand::Invalid("nope".to_string()), &ctx).await;
        assert!(result.is_err());
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_theme_toggle_persists() {
        let store = InMemoryStorage::new();
        let (ctx, _http) = context(store.clone());
        run_cli_command(CliCommand::Theme(PreferenceArg::Toggle), &ctx)
            .await
            .unwrap();
        assert_eq!(ctx.preferences.read().await.theme(), ThemeScheme::Dark);
        assert_eq!(store.snapshot("theme_mode").as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_login_and_logout() {
        let store = InMemoryStorage::new();
        let (ctx, http) = context(store.clone());
        http.set_default_response(MockResponse::json(
            200,
            json!({"message": "Login successful", "user_id": "u1", "name": "Mali"}),
        ));
        let login = CliCommand::Login {
            email: "m@x.th".to_string(),
            password: "secret1".to_string(),
        };
        run_cli_command(login, &ctx).await.unwrap();
        assert!(store.contains("user_id"));

        run_cli_command(CliCommand::Logout, &ctx).await.unwrap();
        assert!(!store.contains("user_id"));
    }

    #[tokio::test]
    async fn test_chat_sends_after_loading_history() {
        let store = InMemoryStorage::new();
        let (ctx, http) = context(store.clone());
        http.set_method_response("GET", "http://api.test/chat/history", MockResponse::json(200, json!([])));
        http.set_method_response(
            "POST",
            "http://api.test/chat",
            MockResponse::json(200, json!({"response": "I hear you", "severity": "LOW"})),
        );

        let command = CliCommand::Chat {
            text: Some("hello".to_string()),
        };
        run_cli_command(command, &ctx).await.unwrap();

        let cached = store.snapshot("chat_history").unwrap();
        let messages: Vec<serde_json::Value> = serde_json::from_str(&cached).unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1]["text"], "hello");
        assert_eq!(messages[2]["text"], "I hear you");
    }

    #[tokio::test]
    async fn test_mood_checkin_is_stored() {
        let store = InMemoryStorage::new();
        let (ctx, _http) = context(store.clone());
        let command = CliCommand::Mood {
            mood: Mood::Happy,
            reason: MoodReason::Family,
            note: String::new(),
        };
        run_cli_command(command, &ctx).await.unwrap();
        assert!(store.snapshot("mood_checkins").unwrap().contains("\"happy\""));
    }
}
