use thiserror::Error;

/// Result type for stepeval operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for stepeval operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON decode errors when reading slice-record files
    #[error("Decode error in {file}: {source}")]
    Decode {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A step label outside the fixed vocabulary was encountered.
    ///
    /// Out-of-vocabulary labels are a data-integrity problem and abort the
    /// run rather than being coerced to a catch-all class.
    #[error("Unknown step label: {0:?}")]
    UnknownLabel(String),

    /// Malformed slice indices that would produce an ambiguous join
    #[error("Join error: {0}")]
    Join(String),

    /// No videos were scored, so the summary is undefined
    #[error("No data: {0}")]
    NoData(String),

    /// Any other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an unknown-label error
    pub fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownLabel(label.into())
    }

    /// Creates a join error
    pub fn join(msg: impl Into<String>) -> Self {
        Self::Join(msg.into())
    }

    /// Creates a no-data error
    pub fn no_data(msg: impl Into<String>) -> Self {
        Self::NoData(msg.into())
    }

    /// Creates a decode error for a given file
    pub fn decode(file: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            file: file.into(),
            source,
        }
    }
}
