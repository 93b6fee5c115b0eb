use serde::{Deserialize, Serialize};

/// Length of the id prefix shown in lists
pub const SHORT_ID_LEN: usize = 8;

/// A persisted note. Timestamps are milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub text: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Note {
    pub fn new(id: String, text: String, now_millis: i64) -> Self {
        Self {
            id,
            text,
            created_at: now_millis,
            updated_at: now_millis,
        }
    }

    /// Leading characters of the id, enough to address the note from the CLI
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    /// True once the note has been edited at least once
    pub fn is_edited(&self) -> bool {
        self.updated_at > self.created_at
    }
}
