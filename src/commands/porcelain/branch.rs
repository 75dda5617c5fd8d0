use crate::areas::repository::Repository;
use crate::artifacts::refs::ref_name::RefName;
use crate::artifacts::refs::revision::Revision;
use std::io::Write;

impl Repository {
    pub fn branch(&mut self, branch_name: &str, start_point: Option<&str>) -> anyhow::Result<()> {
        let ref_name = RefName::branch(branch_name)?;
        let source_oid = Revision::parse(start_point).resolve(self)?;

        self.refs().create_ref(&ref_name, &source_oid)?;

        Ok(())
    }

    pub fn delete_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let ref_name = RefName::branch(branch_name)?;

        if self.refs().current_branch()?.as_deref() == Some(branch_name) {
            anyhow::bail!("cannot delete branch {} checked out at HEAD", branch_name);
        }

        let oid = self.refs().delete_ref(&ref_name)?;
        writeln!(
            self.writer(),
            "Deleted branch {} (was {}).",
            branch_name,
            oid.to_short_oid()
        )?;

        Ok(())
    }
}
