use crate::areas::repository::Repository;
use crate::artifacts::refs::ref_type::RefType;
use std::io::Write;

impl Repository {
    /// Print the kind of a full reference name
    ///
    /// The name does not have to exist; classification only looks at its shape
    /// and at the branch HEAD points at.
    pub fn ref_type(&mut self, full_name: &str) -> anyhow::Result<()> {
        let current_branch = self.refs().current_branch()?;
        let ref_type = RefType::classify(full_name, current_branch.as_deref());

        writeln!(self.writer(), "{}", ref_type)?;

        Ok(())
    }
}
