use crate::artifacts::refs::ref_type::RefType;

/// Top-level sections of the sidebar, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(usize)]
pub enum SidebarRoot {
    Branches = 0,
    Remotes = 1,
    Tags = 2,
    Stashes = 3,
}

impl SidebarRoot {
    pub const ALL: [SidebarRoot; 4] = [
        SidebarRoot::Branches,
        SidebarRoot::Remotes,
        SidebarRoot::Tags,
        SidebarRoot::Stashes,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> anyhow::Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no sidebar section at index {}", index))
    }

    pub fn title(self) -> &'static str {
        match self {
            SidebarRoot::Branches => "BRANCHES",
            SidebarRoot::Remotes => "REMOTES",
            SidebarRoot::Tags => "TAGS",
            SidebarRoot::Stashes => "STASHES",
        }
    }

    /// The section a reference of the given kind is listed under
    ///
    /// Stashes are read from the stash reflog rather than classified refs,
    /// so no ref kind maps to [`SidebarRoot::Stashes`].
    pub fn for_ref_type(ref_type: RefType) -> Option<Self> {
        match ref_type {
            RefType::Branch | RefType::ActiveBranch => Some(SidebarRoot::Branches),
            RefType::RemoteBranch | RefType::Remote => Some(SidebarRoot::Remotes),
            RefType::Tag => Some(SidebarRoot::Tags),
            RefType::Unknown => None,
        }
    }
}

impl std::fmt::Display for SidebarRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
