//! Git object identifier (SHA-1 hash)
//!
//! Refs only ever store object IDs as 40-character lowercase hexadecimal
//! strings. xit never reads the objects themselves, it only moves these
//! identifiers between ref files.

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Upper-case hex digits are accepted and normalised to lower case.
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    pub fn looks_like_oid(candidate: &str) -> bool {
        candidate.len() == OBJECT_ID_LENGTH && candidate.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> String {
        self.0
            .get(..SHORT_OBJECT_ID_LENGTH)
            .unwrap_or(&self.0)
            .to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn normalises_upper_case_hex() {
        let oid = ObjectId::try_parse("ABCDEF0123456789ABCDEF0123456789ABCDEF01".to_string()).unwrap();

        assert_eq!(oid.as_ref(), "abcdef0123456789abcdef0123456789abcdef01");
        assert_eq!(oid.to_short_oid(), "abcdef0");
    }

    #[rstest]
    #[case("")]
    #[case("abc123")]
    #[case("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz")]
    #[case("abcdef0123456789abcdef0123456789abcdef012")]
    fn rejects_malformed_ids(#[case] id: &str) {
        assert!(ObjectId::try_parse(id.to_string()).is_err());
        assert!(!ObjectId::looks_like_oid(id));
    }
}
