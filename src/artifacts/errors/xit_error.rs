use crate::artifacts::errors::{ErrorCode, ErrorDomain};
use std::path::Path;

/// Code reported for Git-layer failures that carry no code of their own
const UNKNOWN_GIT_CODE: i32 = -1;

/// An error tagged with the domain whose code space `code` belongs to
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({domain} code {code})")]
pub struct XitError {
    domain: ErrorDomain,
    code: i32,
    message: String,
}

impl XitError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            domain: ErrorDomain::Xit,
            code: code.code(),
            message: message.into(),
        }
    }

    /// The ref at `path` is locked by another writer
    pub fn write_lock(path: &Path) -> Self {
        Self::new(
            ErrorCode::WriteLock,
            format!(
                "unable to create lock file {:?}: another process holds the write lock",
                path
            ),
        )
    }

    pub fn git(code: i32, message: impl Into<String>) -> Self {
        Self {
            domain: ErrorDomain::Git,
            code,
            message: message.into(),
        }
    }

    pub fn domain(&self) -> ErrorDomain {
        self.domain
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The application error code, if this error belongs to the xit domain
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self.domain {
            ErrorDomain::Xit => ErrorCode::try_from(self.code).ok(),
            ErrorDomain::Git => None,
        }
    }

    pub fn is_write_lock(&self) -> bool {
        self.error_code() == Some(ErrorCode::WriteLock)
    }
}

impl From<std::io::Error> for XitError {
    fn from(error: std::io::Error) -> Self {
        Self::git(
            error.raw_os_error().unwrap_or(UNKNOWN_GIT_CODE),
            error.to_string(),
        )
    }
}
