use std::fmt;

/// Failure of a session configuration or lifecycle command.
///
/// Never produced while streaming: a sample either decodes or reaches the
/// delegate as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No session (or no configured input/output) to operate on.
    MissingSession,
    /// No device for the requested position, or it could not be opened.
    InvalidInput(String),
    /// The output could not be attached to the current input.
    InvalidOutput(String),
    Unknown(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::MissingSession => write!(f, "capture session is missing"),
            CaptureError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            CaptureError::InvalidOutput(msg) => write!(f, "invalid output: {msg}"),
            CaptureError::Unknown(msg) => write!(f, "unknown capture error: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        CaptureError::Unknown(err.to_string())
    }
}

impl CaptureError {
    // reclassify as an input/output error unless it already is one
    pub(crate) fn or_input(self) -> Self {
        match self {
            CaptureError::InvalidInput(_) => self,
            other => CaptureError::InvalidInput(other.to_string()),
        }
    }

    pub(crate) fn or_output(self) -> Self {
        match self {
            CaptureError::InvalidOutput(_) => self,
            other => CaptureError::InvalidOutput(other.to_string()),
        }
    }
}
