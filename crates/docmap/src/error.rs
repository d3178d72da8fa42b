/// An error that can occur in docmap.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input to identifier extraction is absent or carries no
    /// recognizable identifier. Local and non-retryable.
    #[error("document incorrect")]
    InvalidReference,

    /// A single-reference lookup found no matching entity.
    #[error("record not found: {kind}")]
    NotFound { kind: &'static str },

    /// An entity could not be hydrated from a raw document.
    #[error("failed to load document: {0}")]
    Load(#[from] serde_json::Error),

    /// An error surfaced by the query executor, forwarded unchanged.
    #[error(transparent)]
    Executor(#[from] anyhow::Error),
}

impl Error {
    /// Creates an error from a query executor failure.
    ///
    /// This is the preferred way for executor implementations to surface
    /// their underlying client errors.
    pub fn executor(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Executor(anyhow::Error::from(err))
    }

    pub fn not_found(kind: &'static str) -> Self {
        Self::NotFound { kind }
    }

    /// Returns `true` if this error is an invalid reference error.
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, Self::InvalidReference)
    }

    /// Returns `true` if this error is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this error was forwarded from the executor.
    pub fn is_executor(&self) -> bool {
        matches!(self, Self::Executor(_))
    }
}
