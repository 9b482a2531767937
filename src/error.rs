use std::io::Error as IoError;

#[derive(Debug)]
pub enum SammockError {
    /// Input line that does not follow the alphabet or read grammar (1-based line number)
    Validation { line: usize, message: String },
    /// Input that is well-formed line by line but unusable as a whole
    Structural(String),
    IoError(IoError),
}

impl std::fmt::Display for SammockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SammockError::Validation { line, message } => {
                write!(f, "Illegal input on line number {}: {}", line, message)
            }
            SammockError::Structural(msg) => write!(f, "{}", msg),
            SammockError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for SammockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SammockError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IoError> for SammockError {
    fn from(e: IoError) -> Self {
        SammockError::IoError(e)
    }
}

impl From<SammockError> for IoError {
    fn from(e: SammockError) -> Self {
        match e {
            SammockError::IoError(e) => e,
            other => IoError::new(std::io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SammockError>;
