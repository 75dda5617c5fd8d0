use crate::artifacts::refs::ref_type::RefType;
use crate::artifacts::refs::{
    HEAD_REF_NAME, HEADS_PREFIX, INVALID_REF_NAME_REGEX, REFS_PREFIX, REMOTES_PREFIX, TAGS_PREFIX,
};
use anyhow::Context;

/// A validated full reference name, relative to the git directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefName(String);

impl RefName {
    pub fn try_parse(full_name: String) -> anyhow::Result<Self> {
        if full_name == HEAD_REF_NAME {
            return Ok(Self(full_name));
        }

        let short_name = full_name.strip_prefix(REFS_PREFIX).ok_or_else(|| {
            anyhow::anyhow!(
                "ref name must start with '{}' or be '{}', got '{}'",
                REFS_PREFIX,
                HEAD_REF_NAME,
                full_name
            )
        })?;
        validate_short_name(short_name)?;

        Ok(Self(full_name))
    }

    /// Build `refs/heads/<name>` from a short branch name
    pub fn branch(name: &str) -> anyhow::Result<Self> {
        Self::with_prefix(HEADS_PREFIX, name)
            .with_context(|| format!("invalid branch name: {}", name))
    }

    /// Build `refs/tags/<name>` from a short tag name
    pub fn tag(name: &str) -> anyhow::Result<Self> {
        Self::with_prefix(TAGS_PREFIX, name).with_context(|| format!("invalid tag name: {}", name))
    }

    fn with_prefix(prefix: &str, name: &str) -> anyhow::Result<Self> {
        validate_short_name(name)?;
        Ok(Self(format!("{}{}", prefix, name)))
    }

    pub fn ref_type(&self, current_branch: Option<&str>) -> RefType {
        RefType::classify(&self.0, current_branch)
    }

    /// The name with its namespace prefix stripped
    ///
    /// `refs/heads/main` → `main`, `refs/remotes/origin/main` → `origin/main`,
    /// `refs/tags/v1` → `v1`. Other names are returned unchanged.
    pub fn short_name(&self) -> &str {
        [HEADS_PREFIX, REMOTES_PREFIX, TAGS_PREFIX]
            .iter()
            .find_map(|prefix| self.0.strip_prefix(prefix))
            .unwrap_or(&self.0)
    }

    /// The remote part of a remote ref (`refs/remotes/origin/main` → `origin`)
    pub fn remote_name(&self) -> Option<&str> {
        let remote_ref = self.0.strip_prefix(REMOTES_PREFIX)?;
        remote_ref.split('/').next().filter(|remote| !remote.is_empty())
    }

    /// The branch part of a remote ref (`refs/remotes/origin/feature/x` → `feature/x`)
    pub fn remote_branch_name(&self) -> Option<&str> {
        self.0
            .strip_prefix(REMOTES_PREFIX)?
            .split_once('/')
            .map(|(_, branch)| branch)
            .filter(|branch| !branch.is_empty())
    }

    pub fn as_ref_path(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate_short_name(name: &str) -> anyhow::Result<()> {
    if name.is_empty() {
        anyhow::bail!("ref name cannot be empty");
    }

    let re = regex::Regex::new(INVALID_REF_NAME_REGEX)
        .with_context(|| format!("invalid ref name regex: {INVALID_REF_NAME_REGEX}"))?;

    if re.is_match(name) {
        anyhow::bail!("invalid ref name: {}", name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;
    use rstest::rstest;

    proptest! {
        #[test]
        fn accepts_hierarchical_branch_names(
            prefix in "[a-zA-Z0-9_-]+",
            suffix in "[a-zA-Z0-9_-]+"
        ) {
            let name = format!("{}/{}", prefix, suffix);
            let ref_name = RefName::branch(&name).unwrap();

            assert_eq!(ref_name.short_name(), name);
            assert_eq!(ref_name.as_ref_path(), format!("refs/heads/{}", name));
        }

        #[test]
        fn rejects_names_ending_with_lock(prefix in "[a-zA-Z0-9_-]+") {
            assert!(RefName::branch(&format!("{}.lock", prefix)).is_err());
        }

        #[test]
        fn rejects_special_characters(
            prefix in "[a-zA-Z0-9_-]+",
            suffix in "[a-zA-Z0-9_-]+",
            special_char in r"[\*:\?\[\\^~ ]"
        ) {
            let name = format!("{}{}{}", prefix, special_char, suffix);
            assert!(RefName::tag(&name).is_err());
        }
    }

    #[rstest]
    #[case("")]
    #[case(".hidden")]
    #[case("a..b")]
    #[case("/leading")]
    #[case("trailing/")]
    #[case("a/.b")]
    #[case("at@{brace")]
    fn rejects_invalid_short_names(#[case] name: &str) {
        assert!(RefName::branch(name).is_err());
    }

    #[rstest]
    #[case("HEAD")]
    #[case("refs/heads/main")]
    #[case("refs/remotes/origin/main")]
    #[case("refs/stash")]
    fn parses_full_names(#[case] full_name: &str) {
        assert_eq!(
            RefName::try_parse(full_name.to_string()).unwrap().as_ref(),
            full_name
        );
    }

    #[rstest]
    #[case("main")]
    #[case("refs/")]
    #[case("refs/heads/bad..name")]
    fn rejects_malformed_full_names(#[case] full_name: &str) {
        assert!(RefName::try_parse(full_name.to_string()).is_err());
    }

    #[test]
    fn splits_remote_refs() {
        let ref_name = RefName::try_parse("refs/remotes/origin/feature/x".to_string()).unwrap();

        assert_eq!(ref_name.remote_name(), Some("origin"));
        assert_eq!(ref_name.remote_branch_name(), Some("feature/x"));
        assert_eq!(ref_name.short_name(), "origin/feature/x");
        assert_eq!(ref_name.ref_type(None), RefType::RemoteBranch);
    }

    #[test]
    fn local_refs_have_no_remote() {
        let ref_name = RefName::branch("main").unwrap();

        assert_eq!(ref_name.remote_name(), None);
        assert_eq!(ref_name.remote_branch_name(), None);
        assert_eq!(ref_name.ref_type(Some("main")), RefType::ActiveBranch);
    }
}
