use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeFmtError {
    #[error("Invalid format pattern: {pattern}")]
    InvalidPattern { pattern: String },

    #[error("Timestamp out of representable range: {epoch_ms} ms")]
    TimestampOutOfRange { epoch_ms: i64 },

    #[error("Local time does not exist or is ambiguous: {text}")]
    UnrepresentableLocalTime { text: String },

    #[error("Parse error: {0}")]
    ParseError(#[from] chrono::ParseError),
}

impl TimeFmtError {
    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
        }
    }

    pub fn unrepresentable(text: impl Into<String>) -> Self {
        Self::UnrepresentableLocalTime { text: text.into() }
    }
}
