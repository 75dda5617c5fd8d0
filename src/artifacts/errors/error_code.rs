/// Application error codes, only meaningful within [`super::XIT_ERROR_DOMAIN`]
///
/// Values are stable across builds. `0` is reserved as the non-error value
/// and never converts into an `ErrorCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    /// A ref could not be written because its lock file is held
    WriteLock = 1,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 1] = [ErrorCode::WriteLock];

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = anyhow::Error;

    fn try_from(code: i32) -> anyhow::Result<Self> {
        ErrorCode::ALL
            .into_iter()
            .find(|error_code| error_code.code() == code)
            .ok_or_else(|| anyhow::anyhow!("unknown xit error code: {}", code))
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::WriteLock => write!(f, "write lock"),
        }
    }
}
