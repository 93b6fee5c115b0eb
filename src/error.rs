use thiserror::Error;

/// Failures of the key-value backend holding the notes slot
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not encode notes: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not find a config directory")]
    NoConfigDir,

    #[error("database schema v{found} is newer than this build supports (v{supported})")]
    NewerSchema { found: i32, supported: i32 },
}

/// Failures resolving a note from user input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("no note matches \"{0}\"")]
    NotFound(String),

    #[error("\"{query}\" matches {count} notes")]
    Ambiguous { query: String, count: usize },
}
