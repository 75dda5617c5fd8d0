use crate::areas::repository::Repository;
use crate::artifacts::refs::ref_name::RefName;
use crate::artifacts::refs::revision::Revision;
use std::io::Write;

impl Repository {
    /// Create a lightweight tag
    pub fn tag(&mut self, tag_name: &str, target: Option<&str>) -> anyhow::Result<()> {
        let ref_name = RefName::tag(tag_name)?;
        let target_oid = Revision::parse(target).resolve(self)?;

        self.refs().create_ref(&ref_name, &target_oid)
    }

    pub fn delete_tag(&mut self, tag_name: &str) -> anyhow::Result<()> {
        let oid = self.refs().delete_ref(&RefName::tag(tag_name)?)?;
        writeln!(
            self.writer(),
            "Deleted tag '{}' (was {})",
            tag_name,
            oid.to_short_oid()
        )?;

        Ok(())
    }
}
