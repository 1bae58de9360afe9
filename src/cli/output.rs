//! Output formatting utilities

use crate::domain::Note;
use crate::infrastructure::Config;
use chrono::NaiveDate;
use std::fmt::Write;

/// Format notes for display, one `<id>: <tags> [<date>]` header per note
/// followed by its memo
pub fn format_note_list(notes: &[&Note], date_format: &str) -> String {
    if notes.is_empty() {
        return "No notes found\n".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{}: {} [{}]\n{}\n",
            note.id(),
            note.tags,
            format_date(note.creation_date(), date_format),
            note.memo
        ));
    }
    output
}

/// Render a date, falling back to ISO form when the format needs fields a
/// plain date does not have (e.g. `%H`)
fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", date.format(date_format)).is_err() {
        return date.to_string();
    }
    rendered
}

/// Format resolved addresses, one per line
pub fn format_address_list<'a>(emails: impl IntoIterator<Item = &'a str>) -> String {
    let mut output = String::new();
    for email in emails {
        output.push_str(email);
        output.push('\n');
    }

    if output.is_empty() {
        return "No addresses found\n".to_string();
    }
    output
}

/// Format the effective configuration as `key = value` lines
pub fn format_config(config: &Config) -> String {
    let mut output = String::new();
    output.push_str(&format!("from_addr = {}\n", config.from_addr));
    output.push_str(&format!("log_level = {}\n", config.log_level));
    output.push_str(&format!("date_format = {}\n", config.date_format));
    for (name, value) in &config.headers {
        output.push_str(&format!("headers.{} = {}\n", name, value));
    }
    output
}
