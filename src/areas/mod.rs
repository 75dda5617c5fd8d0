//! Repository storage areas
//!
//! - `config`: remotes declared in `.git/config`
//! - `refs`: loose and packed references, written under lock files
//! - `repository`: the repository handle tying the areas together
//! - `stash`: stash entries read from the stash reflog

pub(crate) mod config;
pub(crate) mod refs;
pub mod repository;
pub mod stash;
