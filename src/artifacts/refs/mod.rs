//! Reference names and their classification
//!
//! - `ref_name`: validated full reference names (`refs/heads/main`)
//! - `ref_type`: the closed set of reference kinds and the classifier
//! - `revision`: start points for new branches and tags

pub mod ref_name;
pub mod ref_type;
pub mod revision;

pub const HEAD_REF_NAME: &str = "HEAD";
pub const REFS_PREFIX: &str = "refs/";
pub const HEADS_PREFIX: &str = "refs/heads/";
pub const REMOTES_PREFIX: &str = "refs/remotes/";
pub const TAGS_PREFIX: &str = "refs/tags/";
pub const LOCK_SUFFIX: &str = ".lock";

pub const INVALID_REF_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
pub const SYMREF_REGEX: &str = r"^ref: (.+)$";
pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};
