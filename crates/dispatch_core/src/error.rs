use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can abort a dispatch run.
///
/// No variant is recoverable: the first error ends the pass and no partial
/// result store is handed out.
#[derive(Debug)]
pub enum DispatchError {
    /// Invalid run configuration, e.g. an empty vehicle pool.
    Configuration { reason: String },
    /// An input line that does not hold six non-negative integers, or a
    /// missing line. `line` is 1-based.
    MalformedRecord { line: usize, reason: String },
    /// Rides handed to the engine directly must be numbered 0..n in order.
    RideOutOfSequence { expected: usize, found: usize },
    /// The event loop stopped before every ride reached a manifest.
    IncompletePass { expected: usize, dispatched: usize },
    /// Reading the instance or writing the report failed.
    Io { path: PathBuf, source: io::Error },
}

impl DispatchError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { reason } => write!(f, "invalid configuration: {reason}"),
            Self::MalformedRecord { line, reason } => {
                write!(f, "malformed record on line {line}: {reason}")
            }
            Self::RideOutOfSequence { expected, found } => write!(
                f,
                "ride {found} is out of sequence (expected ride {expected})"
            ),
            Self::IncompletePass {
                expected,
                dispatched,
            } => write!(
                f,
                "dispatch pass ended after {dispatched} of {expected} rides"
            ),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
