use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PoseError {
    /// The frame cannot be fed to the estimator.
    Input(String),
    /// The estimator backend failed.
    Backend(String),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::Input(msg) => write!(f, "input error: {msg}"),
            PoseError::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl std::error::Error for PoseError {}

impl From<image::ImageError> for PoseError {
    fn from(err: image::ImageError) -> Self {
        PoseError::Input(err.to_string())
    }
}
