//! Command implementations
//!
//! - `plumbing`: inspection commands meant for scripts (ref-type)
//! - `porcelain`: user-facing commands (sidebar, branch, tag)

pub mod plumbing;
pub mod porcelain;
