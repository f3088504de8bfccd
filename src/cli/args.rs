//! Command-line argument parsing.

use crate::models::{Language, Mood, MoodReason};
use crate::preferences::ThemeScheme;

/// What to do with a stored preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceArg<T> {
    /// Print the current value
    Show,
    Set(T),
    Toggle,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Send one message, or chat interactively when `text` is `None`
    Chat { text: Option<String> },
    /// Print the conversation grouped by day
    History,
    Login { email: String, password: String },
    Logout,
    /// List help lines for the current language
    Resources,
    Theme(PreferenceArg<ThemeScheme>),
    Language(PreferenceArg<Language>),
    /// Record today's mood check-in and print the week
    Mood {
        mood: Mood,
        reason: MoodReason,
        note: String,
    },
    Version,
    Help,
    /// Arguments that do not form a command, with the reason
    Invalid(String),
}

/// Usage text printed by `--help` and after an invalid command.
pub const USAGE: &str = "\
Usage: mindnest <command>

Commands:
  chat [text]                  Send a message, or chat interactively
  history                      Show the conversation
  login <email> <password>     Log in
  logout                       Log out
  resources                    List help lines
  theme [light|dark|toggle]    Show or change the theme
  language [en|th|toggle]      Show or change the language
  mood <mood> <reason> [note]  Check in (moods: happy neutral sad angry anxious;
                               reasons: work family love health unknown)

Options:
  -h, --help                   Show this help
  -V, --version                Show the version";

/// Parse command-line arguments, including the program name.
///
/// # Examples
///
/// ```
/// use mindnest::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["mindnest".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        return CliCommand::Help;
    };

    match command.as_str() {
        "--version" | "-V" => CliCommand::Version,
        "--help" | "-h" | "help" => CliCommand::Help,
        "chat" => {
            let text = rest.join(" ");
            CliCommand::Chat {
                text: (!text.trim().is_empty()).then_some(text),
            }
        }
        "history" => CliCommand::History,
        "login" => match rest {
            [email, password] => CliCommand::Login {
                email: email.clone(),
                password: password.clone(),
            },
            _ => CliCommand::Invalid("login needs <email> <password>".to_string()),
        },
        "logout" => CliCommand::Logout,
        "resources" => CliCommand::Resources,
        "theme" => match parse_preference(rest, ThemeScheme::from_str_exact) {
            Some(arg) => CliCommand::Theme(arg),
            None => CliCommand::Invalid("theme takes light, dark or toggle".to_string()),
        },
        "language" => match parse_preference(rest, Language::from_code) {
            Some(arg) => CliCommand::Language(arg),
            None => CliCommand::Invalid("language takes en, th or toggle".to_string()),
        },
        "mood" => parse_mood(rest),
        other => CliCommand::Invalid(format!("unknown command '{}'", other)),
    }
}

fn parse_preference<T>(rest: &[String], parse: fn(&str) -> Option<T>) -> Option<PreferenceArg<T>> {
    match rest {
        [] => Some(PreferenceArg::Show),
        [value] if value == "toggle" => Some(PreferenceArg::Toggle),
        [value] => parse(value).map(PreferenceArg::Set),
        _ => None,
    }
}

fn parse_mood(rest: &[String]) -> CliCommand {
    let (mood, reason, note) = match rest {
        [mood, reason, note @ ..] => (mood, reason, note.join(" ")),
        _ => return CliCommand::Invalid("mood needs <mood> <reason>".to_string()),
    };
    let Some(mood) = Mood::parse(mood) else {
        return CliCommand::Invalid(format!("unknown mood '{}'", mood));
    };
    let Some(reason) = MoodReason::parse(reason) else {
        return CliCommand::Invalid(format!("unknown reason '{}'", reason));
    };
    CliCommand::Mood { mood, reason, note }
}
