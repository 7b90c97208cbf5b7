use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not recognise.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} value '{value}' in database")]
    UnknownEnumValue {
        /// Which enum failed to parse, e.g. "role"
        kind: &'static str,
        /// The stored value
        value: String,
    },

    /// A time window pushed a timestamp past the range chrono can represent.
    #[error("{base} plus {hours} hours is out of range")]
    TimeOutOfRange {
        base: chrono::DateTime<chrono::Utc>,
        hours: i64,
    },
}
