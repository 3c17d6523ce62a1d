//! Error kinds for flowviz operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help users write clear error handling logic.
/// Users can match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument passed to function
    InvalidArgument,

    /// The layout backend binary could not be found
    BackendNotFound,

    /// The layout backend ran but exited with failure
    BackendFailed,

    /// Backend output bytes failed to decode
    DecodeFailed,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::BackendNotFound.to_string(), "BackendNotFound");
        assert_eq!(ErrorKind::DecodeFailed.to_string(), "DecodeFailed");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(ErrorKind::IoFailed.as_str(), "IoFailed");
    }
}
