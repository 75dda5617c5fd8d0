//! Reference classification
//!
//! Every reference falls in exactly one [`RefType`]. The classification is a
//! pure function of the full reference name and the branch HEAD points at:
//!
//! | Full name                          | Kind                          |
//! |------------------------------------|-------------------------------|
//! | `refs/heads/<name>`                | `Branch` / `ActiveBranch`     |
//! | `refs/remotes/<remote>/<branch>`   | `RemoteBranch`                |
//! | `refs/remotes/<remote>`            | `Remote`                      |
//! | `refs/tags/<name>`                 | `Tag`                         |
//! | anything else                      | `Unknown`                     |

use crate::artifacts::refs::{HEADS_PREFIX, REMOTES_PREFIX, TAGS_PREFIX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum RefType {
    Branch = 0,
    ActiveBranch = 1,
    RemoteBranch = 2,
    Tag = 3,
    Remote = 4,
    Unknown = 5,
}

impl RefType {
    pub const ALL: [RefType; 6] = [
        RefType::Branch,
        RefType::ActiveBranch,
        RefType::RemoteBranch,
        RefType::Tag,
        RefType::Remote,
        RefType::Unknown,
    ];

    /// Classify a full reference name
    ///
    /// # Arguments
    ///
    /// * `full_name` - Reference name relative to the git directory (e.g. `refs/heads/main`)
    /// * `current_branch` - Short name of the branch HEAD points at, None when detached
    pub fn classify(full_name: &str, current_branch: Option<&str>) -> RefType {
        if let Some(branch) = non_empty_suffix(full_name, HEADS_PREFIX) {
            return if current_branch == Some(branch) {
                RefType::ActiveBranch
            } else {
                RefType::Branch
            };
        }

        if let Some(remote_ref) = non_empty_suffix(full_name, REMOTES_PREFIX) {
            return match remote_ref.split_once('/') {
                Some((remote, branch)) if !remote.is_empty() && !branch.is_empty() => {
                    RefType::RemoteBranch
                }
                Some(_) => RefType::Unknown,
                None => RefType::Remote,
            };
        }

        if non_empty_suffix(full_name, TAGS_PREFIX).is_some() {
            return RefType::Tag;
        }

        RefType::Unknown
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            RefType::Branch => "branch",
            RefType::ActiveBranch => "active-branch",
            RefType::RemoteBranch => "remote-branch",
            RefType::Tag => "tag",
            RefType::Remote => "remote",
            RefType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RefType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn non_empty_suffix<'a>(full_name: &'a str, prefix: &str) -> Option<&'a str> {
    full_name
        .strip_prefix(prefix)
        .filter(|suffix| !suffix.is_empty())
}
