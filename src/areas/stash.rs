//! Stash entries
//!
//! Git keeps the stash as the reflog of `refs/stash`. Each line of
//! `logs/refs/stash` records one `git stash push`, oldest first:
//!
//! ```text
//! <old oid> <new oid> <name> <<email>> <epoch seconds> <±hhmm>\t<message>
//! ```
//!
//! `stash@{0}` is the last line of the file.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use std::path::Path;

const STASH_LOG_REGEX: &str =
    r"^([0-9a-fA-F]{40}) ([0-9a-fA-F]{40}) (.*?) <([^>]*)> (\d+) ([+-])(\d{2})(\d{2})\t(.*)$";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StashEntry {
    pub index: usize,
    pub oid: ObjectId,
    pub message: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl std::fmt::Display for StashEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stash@{{{}}}: {}", self.index, self.message)
    }
}

#[derive(Debug, new)]
pub struct Stash {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

impl Stash {
    /// Stash entries, newest first
    pub fn list(&self) -> anyhow::Result<Vec<StashEntry>> {
        let log_path = self.log_path();
        if !log_path.is_file() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&log_path)
            .with_context(|| format!("failed to read stash log at {:?}", log_path))?;
        let re = regex::Regex::new(STASH_LOG_REGEX)
            .with_context(|| format!("invalid stash log regex: {STASH_LOG_REGEX}"))?;

        let entries = content
            .lines()
            .rev()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match Self::parse_line(&re, line) {
                Ok(entry) => Some(entry),
                Err(error) => {
                    tracing::warn!(%line, %error, "skipping malformed stash log line");
                    None
                }
            })
            .enumerate()
            .map(|(index, (oid, message, timestamp))| {
                StashEntry::new(index, oid, message, timestamp)
            })
            .collect();

        Ok(entries)
    }

    fn parse_line(
        re: &regex::Regex,
        line: &str,
    ) -> anyhow::Result<(ObjectId, String, DateTime<FixedOffset>)> {
        let captures = re
            .captures(line)
            .ok_or_else(|| anyhow::anyhow!("line does not match the reflog format"))?;

        let oid = ObjectId::try_parse(captures[2].to_string())?;
        let seconds = captures[5].parse::<i64>()?;
        let offset_seconds =
            (captures[7].parse::<i32>()? * 60 + captures[8].parse::<i32>()?) * 60;
        let offset = match &captures[6] {
            "-" => FixedOffset::west_opt(offset_seconds),
            _ => FixedOffset::east_opt(offset_seconds),
        }
        .ok_or_else(|| anyhow::anyhow!("invalid timezone offset in stash log"))?;
        let timestamp = DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| anyhow::anyhow!("invalid timestamp in stash log: {}", seconds))?
            .with_timezone(&offset);

        Ok((oid, captures[9].to_string(), timestamp))
    }

    fn log_path(&self) -> Box<Path> {
        self.path
            .join("logs")
            .join("refs")
            .join("stash")
            .into_boxed_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;

    const ZERO_OID: &str = "0000000000000000000000000000000000000000";
    const OID_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const OID_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    #[test]
    fn lists_entries_newest_first() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        dir.child("logs/refs/stash").write_str(&format!(
            "{ZERO_OID} {OID_A} Jane Doe <jane@example.com> 1700000000 +0200\tWIP on main: 1234567 first\n\
             {OID_A} {OID_B} Jane Doe <jane@example.com> 1700000600 -0130\tOn main: second\n"
        ))?;

        let entries = Stash::new(dir.path().to_path_buf().into_boxed_path()).list()?;

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].to_string(), "stash@{0}: On main: second");
        assert_eq!(entries[0].oid.as_ref(), OID_B);
        assert_eq!(entries[0].timestamp.offset().local_minus_utc(), -(90 * 60));
        assert_eq!(entries[1].to_string(), "stash@{1}: WIP on main: 1234567 first");
        assert_eq!(entries[1].timestamp.timestamp(), 1_700_000_000);

        Ok(())
    }

    #[test]
    fn skips_malformed_lines() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        dir.child("logs/refs/stash").write_str(&format!(
            "garbage\n{ZERO_OID} {OID_A} Jane <jane@example.com> 1700000000 +0000\tOn dev: kept\n"
        ))?;

        let entries = Stash::new(dir.path().to_path_buf().into_boxed_path()).list()?;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].index, 0);
        assert_eq!(entries[0].message, "On dev: kept");

        Ok(())
    }

    #[test]
    fn no_stash_log_means_no_entries() -> anyhow::Result<()> {
        let dir = TempDir::new()?;

        assert!(
            Stash::new(dir.path().to_path_buf().into_boxed_path())
                .list()?
                .is_empty()
        );

        Ok(())
    }
}
