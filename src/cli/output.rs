//! Line-based terminal rendering for the CLI.
//!
//! Render functions return lines so they can be tested without a terminal;
//! the `print_*` wrappers write them to stdout.

use crate::models::{ChartPoint, ChatMessage, DisplayItem, Language, MoodEntry, ResourceItem};
use crate::preferences::{hex_to_rgb, Palette, ThemeScheme};
use crate::resources::dial_number;

/// Line width for separators.
const LINE_WIDTH: usize = 48;

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
}

/// Print a title underlined with `═`.
pub fn print_header(title: &str) {
    println!("{}", title);
    println!("{}", "═".repeat(LINE_WIDTH));
}

pub fn print_status(icon: &str, message: &str) {
    println!("{} {}", icon, message);
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// `──── Today ────`
pub fn render_separator(label: &str) -> String {
    let side = LINE_WIDTH.saturating_sub(label.chars().count() + 2) / 2;
    format!("{} {} {}", "─".repeat(side), label, "─".repeat(side))
}

/// A message with its annotations, indented under the speaker line.
pub fn render_message(message: &ChatMessage, language: Language) -> Vec<String> {
    let speaker = match (message.is_user, language) {
        (true, Language::En) => "You",
        (true, Language::Th) => "คุณ",
        (false, _) => "MindNest",
    };
    let mut lines = Vec::new();
    if message.timestamp.is_empty() {
        lines.push(format!("{}:", speaker));
    } else {
        lines.push(format!("[{}] {}:", message.timestamp, speaker));
    }
    lines.extend(message.text.lines().map(|l| format!("  {}", l)));

    for quote in &message.quotes {
        lines.push(format!("  “{}”", quote));
    }
    for technique in &message.techniques {
        lines.push(format!("  ◆ {}", technique.title));
        if !technique.content.is_empty() {
            lines.push(format!("    {}", technique.content));
        }
        for (i, step) in technique.instructions.iter().enumerate() {
            lines.push(format!("    {}. {}", i + 1, step));
        }
    }
    if message.shows_crisis_resources() {
        lines.push(format!("  {} Crisis support:", icons::WARNING));
        for resource in &message.crisis_resources {
            lines.push(format!("    {}", render_resource_line(resource)));
        }
    }
    lines
}

pub fn render_display_items(items: &[DisplayItem], language: Language) -> Vec<String> {
    let mut lines = Vec::new();
    for item in items {
        match item {
            DisplayItem::DateSeparator { label, .. } => lines.push(render_separator(label)),
            DisplayItem::Message(message) => lines.extend(render_message(message, language)),
        }
    }
    lines
}

/// `Name  ☎ 1323  (24/7)`
fn render_resource_line(resource: &ResourceItem) -> String {
    let mut line = resource.name.clone();
    if let Some(phone) = resource.phone.as_deref() {
        let number = dial_number(phone);
        if !number.is_empty() {
            line.push_str(&format!("  ☎ {}", number));
        }
    }
    if let Some(hours) = resource.available_hours.as_deref() {
        line.push_str(&format!("  ({})", hours));
    }
    line
}

pub fn render_resources(resources: &[ResourceItem]) -> Vec<String> {
    let mut lines = Vec::new();
    for resource in resources {
        lines.push(render_resource_line(resource));
        if !resource.description.is_empty() {
            lines.push(format!("  {}", resource.description));
        }
        if let Some(website) = resource.website.as_deref() {
            lines.push(format!("  {}", website));
        }
    }
    lines
}

/// One row per day: `18 ▇▇▇▇▇ 😊`.
pub fn render_mood_chart(chart: &[ChartPoint], entries: &[MoodEntry]) -> Vec<String> {
    chart
        .iter()
        .map(|point| {
            let emoji = entries
                .iter()
                .find(|e| e.date_key == point.date_key)
                .map(|e| e.mood.emoji())
                .unwrap_or("·");
            format!(
                "{:>2} {:<5} {}",
                point.label,
                "▇".repeat(point.score as usize),
                emoji
            )
        })
        .collect()
}

/// Two-cell block in a 24-bit background color, blank for non-hex colors.
fn swatch(hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => format!("\x1b[48;2;{};{};{}m  \x1b[0m", r, g, b),
        None => "  ".to_string(),
    }
}

/// Scheme name followed by its hero gradient.
pub fn render_theme(scheme: ThemeScheme) -> String {
    let palette = Palette::for_scheme(scheme);
    let stops: String = palette
        .hero_gradient(scheme)
        .iter()
        .map(|hex| swatch(hex))
        .collect();
    format!("{} {}", scheme.as_str(), stops)
}
