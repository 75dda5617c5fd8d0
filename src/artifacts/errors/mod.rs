//! Error codes and error domains
//!
//! Every error raised by xit itself is tagged with [`XIT_ERROR_DOMAIN`] and a
//! code from [`ErrorCode`]. Failures bubbling up from the Git layer (file
//! system, ref storage) carry [`GIT_ERROR_DOMAIN`] and an opaque code.
//!
//! - `error_code`: application error codes
//! - `error_domain`: the two domain identifiers
//! - `xit_error`: the domain-tagged error type

pub mod error_code;
pub mod error_domain;
pub mod xit_error;

pub use error_code::ErrorCode;
pub use error_domain::{ErrorDomain, GIT_ERROR_DOMAIN, XIT_ERROR_DOMAIN};
pub use xit_error::XitError;
