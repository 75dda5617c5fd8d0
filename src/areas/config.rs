//! Repository configuration (`.git/config`)
//!
//! Only the parts xit needs are read: the names of the `[remote "<name>"]`
//! sections. Remotes that exist only as `refs/remotes/<name>/` directories
//! are merged in, so a remote deleted from the config but still holding
//! fetched refs remains visible.

use anyhow::Context;
use derive_new::new;
use std::collections::BTreeSet;
use std::path::Path;

const CONFIG_FILE: &str = "config";
const REMOTE_SECTION_REGEX: &str = r#"^\s*\[\s*remote\s+"([^"]+)"\s*\]"#;

#[derive(Debug, new)]
pub struct Config {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

impl Config {
    /// Names of all known remotes, sorted and deduplicated
    pub fn list_remotes(&self) -> anyhow::Result<Vec<String>> {
        let mut remotes = self.configured_remotes()?;
        remotes.extend(self.fetched_remotes());

        Ok(remotes.into_iter().collect())
    }

    fn configured_remotes(&self) -> anyhow::Result<BTreeSet<String>> {
        let config_path = self.path.join(CONFIG_FILE);
        if !config_path.is_file() {
            return Ok(BTreeSet::new());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config at {:?}", config_path))?;
        let re = regex::Regex::new(REMOTE_SECTION_REGEX)
            .with_context(|| format!("invalid remote section regex: {REMOTE_SECTION_REGEX}"))?;

        Ok(content
            .lines()
            .filter_map(|line| re.captures(line))
            .map(|captures| captures[1].to_string())
            .collect())
    }

    fn fetched_remotes(&self) -> BTreeSet<String> {
        let remotes_path = self.path.join("refs").join("remotes");

        std::fs::read_dir(remotes_path)
            .map(|entries| {
                entries
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.path().is_dir())
                    .map(|entry| entry.file_name().to_string_lossy().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}
