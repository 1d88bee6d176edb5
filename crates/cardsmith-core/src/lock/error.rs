use std::fmt;
use std::path::PathBuf;

/// Failure to take a store lock
#[derive(Debug)]
pub enum LockError {
    /// Another holder kept the lock past the timeout
    Timeout { path: PathBuf, description: String },
    Io {
        source: std::io::Error,
        path: PathBuf,
        /// Step that failed, e.g. "open lock file"
        operation: String,
    },
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::Timeout { path, description } => write!(
                f,
                "timed out waiting for lock on {} ({})",
                path.display(),
                description
            ),
            LockError::Io {
                source,
                path,
                operation,
            } => write!(f, "could not {} {}: {}", operation, path.display(), source),
        }
    }
}

impl std::error::Error for LockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LockError::Timeout { .. } => None,
            LockError::Io { source, .. } => Some(source),
        }
    }
}
