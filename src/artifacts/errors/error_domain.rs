/// Domain of errors raised by xit itself
pub const XIT_ERROR_DOMAIN: &str = "XTErrorDomainXit";

/// Domain of errors surfaced from the underlying Git layer
pub const GIT_ERROR_DOMAIN: &str = "XTErrorDomainGit";

/// The code space an error code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorDomain {
    Xit,
    Git,
}

impl ErrorDomain {
    pub fn identifier(self) -> &'static str {
        match self {
            ErrorDomain::Xit => XIT_ERROR_DOMAIN,
            ErrorDomain::Git => GIT_ERROR_DOMAIN,
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            XIT_ERROR_DOMAIN => Some(ErrorDomain::Xit),
            GIT_ERROR_DOMAIN => Some(ErrorDomain::Git),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
