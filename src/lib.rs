//! xit: Git reference taxonomy, sidebar model and error domains
//!
//! References are classified into a closed set of [`RefType`]s, arranged into
//! the four fixed [`SidebarRoot`] sections, and every error the crate raises
//! itself carries the [`XIT_ERROR_DOMAIN`] and an [`ErrorCode`].

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::errors::{ErrorCode, ErrorDomain, GIT_ERROR_DOMAIN, XIT_ERROR_DOMAIN, XitError};
pub use artifacts::refs::ref_type::RefType;
pub use artifacts::sidebar::root_item::SidebarRoot;
