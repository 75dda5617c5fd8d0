use crate::artifacts::refs::ref_name::RefName;
use crate::artifacts::refs::ref_type::RefType;
use derive_new::new;

/// A row in the sidebar
///
/// Remote items own their remote-branch rows as children. Stash rows carry
/// no ref name and are tagged [`RefType::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SidebarItem {
    pub title: String,
    pub ref_name: Option<RefName>,
    pub ref_type: RefType,
    #[new(default)]
    pub children: Vec<SidebarItem>,
}

impl SidebarItem {
    pub fn from_ref(ref_name: RefName, ref_type: RefType) -> Self {
        let title = match ref_type {
            RefType::RemoteBranch => ref_name
                .remote_branch_name()
                .unwrap_or_else(|| ref_name.short_name())
                .to_string(),
            _ => ref_name.short_name().to_string(),
        };

        Self::new(title, Some(ref_name), ref_type)
    }

    pub fn is_active(&self) -> bool {
        self.ref_type == RefType::ActiveBranch
    }
}
