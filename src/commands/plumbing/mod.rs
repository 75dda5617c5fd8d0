//! Plumbing commands
//!
//! - `ref-type`: classify a full reference name

pub mod ref_type;
