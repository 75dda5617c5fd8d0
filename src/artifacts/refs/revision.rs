use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::refs::{HEAD_REF_NAME, REF_ALIASES};

/// Starting point for a new branch or tag
///
/// Accepts `HEAD` (or its alias `@`), a full 40-character object ID, or any
/// name [`crate::areas::refs::Refs::find_ref`] can resolve. Refs win over
/// object IDs when a ref happens to be named like one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Head,
    Name(String),
}

impl Revision {
    pub fn parse(revision: Option<&str>) -> Self {
        let revision = revision.unwrap_or(HEAD_REF_NAME);
        let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);

        if resolved_name == HEAD_REF_NAME {
            Revision::Head
        } else {
            Revision::Name(resolved_name.to_string())
        }
    }

    pub fn resolve(&self, repository: &Repository) -> anyhow::Result<ObjectId> {
        match self {
            Revision::Head => repository
                .refs()
                .read_head()?
                .ok_or_else(|| anyhow::anyhow!("HEAD does not point at a commit yet")),
            Revision::Name(name) => {
                if let Some(ref_name) = repository.refs().find_ref(name)? {
                    return repository
                        .refs()
                        .read_ref(&ref_name)?
                        .ok_or_else(|| anyhow::anyhow!("ref {} is empty", ref_name));
                }

                if ObjectId::looks_like_oid(name) {
                    return ObjectId::try_parse(name.to_string());
                }

                Err(anyhow::anyhow!("unknown revision: {}", name))
            }
        }
    }
}
