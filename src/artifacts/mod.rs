//! Reference taxonomy and the models built on it
//!
//! - `errors`: error codes and the two error domains
//! - `objects`: object identifiers stored in refs
//! - `refs`: reference names, kinds and revisions
//! - `sidebar`: the four-section sidebar model

pub mod errors;
pub mod objects;
pub mod refs;
pub mod sidebar;
