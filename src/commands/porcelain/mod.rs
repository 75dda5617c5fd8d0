//! Porcelain commands
//!
//! - `sidebar`: show branches, remotes, tags and stashes
//! - `branch`: create or delete local branches
//! - `tag`: create or delete lightweight tags

pub mod branch;
pub mod sidebar;
pub mod tag;
