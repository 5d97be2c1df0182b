//! Errors raised when text input is parsed into preference identifiers.

/// A caller passed a name that does not belong to any known preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Unknown adjustment field: {0}")]
    UnknownField(String),

    #[error("Unknown value '{value}' for {field}")]
    UnknownValue { field: &'static str, value: String },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

impl PreferenceError {
    pub(crate) fn unknown_value(field: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            field,
            value: value.to_string(),
        }
    }
}
