//! Support notepad commands.
//!
//! # Usage
//!
//! ```bash
//! # Jot down a call before any order exists
//! carvet note add --author anna --query-type billing "caller asked about invoice FV-2024-0117"
//!
//! # Review notes, newest first
//! carvet note list
//! ```
//!
//! # Environment Variables
//!
//! - `CARVET_NOTES` - Path of the support notepad JSON file (`--file`
//!   overrides)

use std::fmt::Write as _;
use std::path::PathBuf;

use tracing::info;

use carvet_crm::QueryType;

use crate::config::CliConfig;
use crate::data;

/// Append a note to the notepad file.
///
/// # Errors
///
/// Returns an error when the text is empty or the notepad file cannot be
/// read or written.
pub fn add(
    author: &str,
    query_type: QueryType,
    text: &str,
    file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?.with_notes_path(file);
    let mut notepad = data::load_notepad(&config.notes_path)?;

    let id = notepad.add_note(author, query_type, text)?;
    data::save_notepad(&config.notes_path, &notepad)?;

    info!(%id, %query_type, "Note saved ({} total)", notepad.len());
    Ok(())
}

/// Print the notepad, newest first.
///
/// # Errors
///
/// Returns an error when the notepad file cannot be read.
pub fn list(file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?.with_notes_path(file);
    let notepad = data::load_notepad(&config.notes_path)?;

    let mut out = String::new();
    for note in notepad.latest_first() {
        let _ = writeln!(
            out,
            "{} [{}] {}: {}",
            note.noted_at.format("%Y-%m-%d %H:%M"),
            note.query_type,
            note.author,
            note.text
        );
    }
    if notepad.is_empty() {
        out.push_str("(no notes yet)\n");
    }

    #[allow(clippy::print_stdout)]
    {
        print!("{out}");
    }
    Ok(())
}
