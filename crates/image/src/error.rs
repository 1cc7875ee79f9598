use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Size { expected: usize, actual: usize },
    Unsupported(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Size { expected, actual } => {
                write!(f, "size error: expected {expected} bytes, got {actual}")
            }
            ImageError::Unsupported(msg) => write!(f, "unsupported: {msg}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}
