use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{models::_entities::notes, settings::Settings};

/// How a note is being shown. Decides the display title of notes stored
/// without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Echo of what was stored; the title is left as is.
    Stored,
    /// Entry of a list or search result: `symbol_count - 1` characters.
    Listing,
    /// A single note fetched by id: `symbol_count` characters.
    Single,
}

impl Presentation {
    const fn title_length(self, symbol_count: usize) -> Option<usize> {
        match self {
            Self::Stored => None,
            Self::Listing => Some(symbol_count.saturating_sub(1)),
            Self::Single => Some(symbol_count),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: String,
}

impl NoteResponse {
    #[must_use]
    pub fn new(note: &notes::Model, presentation: Presentation, settings: &Settings) -> Self {
        let title = match (
            presentation.title_length(settings.symbol_count),
            note.title.as_deref(),
        ) {
            (Some(length), None | Some("")) => Some(truncate(&note.content, length)),
            _ => note.title.clone(),
        };

        Self {
            id: note.id,
            title,
            content: note.content.clone(),
        }
    }

    #[must_use]
    pub fn list(
        notes: &[notes::Model],
        presentation: Presentation,
        settings: &Settings,
    ) -> Vec<Self> {
        notes
            .iter()
            .map(|note| Self::new(note, presentation, settings))
            .collect()
    }
}

/// First `length` characters of `content`, or all of it when shorter.
fn truncate(content: &str, length: usize) -> String {
    content.chars().take(length).collect()
}
