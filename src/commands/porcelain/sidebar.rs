use crate::areas::repository::Repository;
use crate::artifacts::sidebar::Sidebar;

impl Repository {
    pub fn sidebar(&mut self) -> anyhow::Result<()> {
        let sidebar = self.build_sidebar()?;
        let mut writer = self.writer();

        sidebar.render(&mut **writer)
    }

    pub fn build_sidebar(&self) -> anyhow::Result<Sidebar> {
        let refs = self.refs().list_refs()?;
        let remotes = self.config().list_remotes()?;
        let stashes = self.stash().list()?;
        let current_branch = self.refs().current_branch()?;

        tracing::debug!(
            refs = refs.len(),
            remotes = remotes.len(),
            stashes = stashes.len(),
            current_branch = current_branch.as_deref().unwrap_or("(detached)"),
            "building sidebar"
        );

        Ok(Sidebar::build(
            &refs,
            &remotes,
            &stashes,
            current_branch.as_deref(),
        ))
    }
}
