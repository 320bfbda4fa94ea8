use thiserror::Error;

fn mode(case_sensitive: &bool) -> &'static str {
    if *case_sensitive {
        "case-sensitive"
    } else {
        "case-insensitive"
    }
}

/// Everything a lexicon (or one of its collaborators) can fail with.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// `add` or a dump load hit a key already present under the active mode.
    #[error("duplicate key \"{key}\" ({})", mode(.case_sensitive))]
    DuplicateKey { key: String, case_sensitive: bool },

    /// An erroring lookup did not find the key under the active mode.
    #[error("key \"{key}\" not found ({})", mode(.case_sensitive))]
    KeyNotFound { key: String, case_sensitive: bool },

    // Raw dump value that has no `Value` counterpart
    #[error("cannot coerce {0} into a lexicon value")]
    Coercion(String),

    // Malformed dump document
    #[error("bad dump: {0}")]
    Format(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LexiconError>;
