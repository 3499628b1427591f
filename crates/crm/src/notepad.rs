//! The support notepad.
//!
//! A free-standing scratchpad for support agents, deliberately not linked
//! to any order: agents jot down caller context before an order exists.
//! Notes are append-only and rendered newest-first.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// What the support conversation was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Billing,
    Technical,
    Complaint,
    #[default]
    General,
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Billing => "Billing",
            Self::Technical => "Technical",
            Self::Complaint => "Complaint",
            Self::General => "General",
        };
        write!(f, "{s}")
    }
}

impl FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "billing" => Ok(Self::Billing),
            "technical" => Ok(Self::Technical),
            "complaint" => Ok(Self::Complaint),
            "general" => Ok(Self::General),
            other => Err(format!("unknown query type: {other}")),
        }
    }
}

/// One saved support note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportNote {
    pub id: Uuid,
    pub author: String,
    pub query_type: QueryType,
    pub text: String,
    pub noted_at: DateTime<Utc>,
}

/// Errors from the notepad.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NoteError {
    /// Notes must contain at least one non-whitespace character.
    #[error("note text is empty")]
    EmptyText,
}

/// Append-only list of support notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notepad {
    #[serde(default)]
    notes: Vec<SupportNote>,
}

impl Notepad {
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Append a note, stamped with the current time. Returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::EmptyText`] when `text` is empty or whitespace.
    pub fn add_note(
        &mut self,
        author: impl Into<String>,
        query_type: QueryType,
        text: impl Into<String>,
    ) -> Result<Uuid, NoteError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(NoteError::EmptyText);
        }
        let id = Uuid::new_v4();
        self.notes.push(SupportNote {
            id,
            author: author.into(),
            query_type,
            text,
            noted_at: Utc::now(),
        });
        Ok(id)
    }

    /// Notes in display order, newest first.
    pub fn latest_first(&self) -> impl Iterator<Item = &SupportNote> {
        self.notes.iter().rev()
    }

    /// The underlying trail in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[SupportNote] {
        &self.notes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
