//! Repository sidebar model
//!
//! The sidebar always has four sections, in the order given by
//! [`SidebarRoot::ALL`]. References are sorted into sections by their
//! [`RefType`]; remote branches are nested under their remote and stashes
//! come from the stash reflog.
//!
//! - `root_item`: the fixed top-level sections
//! - `sidebar_item`: rows and nested rows

pub mod root_item;
pub mod sidebar_item;

use crate::areas::stash::StashEntry;
use crate::artifacts::refs::HEAD_REF_NAME;
use crate::artifacts::refs::ref_name::RefName;
use crate::artifacts::refs::ref_type::RefType;
use crate::artifacts::sidebar::root_item::SidebarRoot;
use crate::artifacts::sidebar::sidebar_item::SidebarItem;
use colored::Colorize;
use derive_new::new;
use std::collections::BTreeMap;

const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SidebarGroup {
    pub root: SidebarRoot,
    #[new(default)]
    pub items: Vec<SidebarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    groups: [SidebarGroup; 4],
}

impl Sidebar {
    /// Arrange references, remotes and stashes into the four sidebar sections
    ///
    /// # Arguments
    ///
    /// * `refs` - Full names of every reference in the repository
    /// * `remotes` - Names of the configured remotes
    /// * `stashes` - Stash entries, newest first
    /// * `current_branch` - Short name of the checked-out branch, None when detached
    pub fn build(
        refs: &[RefName],
        remotes: &[String],
        stashes: &[StashEntry],
        current_branch: Option<&str>,
    ) -> Self {
        let mut groups = SidebarRoot::ALL.map(SidebarGroup::new);
        let mut remote_items = remotes
            .iter()
            .map(|remote| {
                (
                    remote.clone(),
                    SidebarItem::new(remote.clone(), None, RefType::Remote),
                )
            })
            .collect::<BTreeMap<_, _>>();

        let mut sorted_refs = refs.to_vec();
        sorted_refs.sort_by(|a, b| a.short_name().cmp(b.short_name()));

        for ref_name in sorted_refs {
            let ref_type = ref_name.ref_type(current_branch);

            match ref_type {
                RefType::Branch | RefType::ActiveBranch | RefType::Tag => {
                    if let Some(root) = SidebarRoot::for_ref_type(ref_type) {
                        groups[root.index()]
                            .items
                            .push(SidebarItem::from_ref(ref_name, ref_type));
                    }
                }
                RefType::RemoteBranch => {
                    if ref_name.remote_branch_name() == Some(HEAD_REF_NAME) {
                        continue;
                    }
                    let Some(remote) = ref_name.remote_name().map(str::to_string) else {
                        continue;
                    };

                    remote_items
                        .entry(remote.clone())
                        .or_insert_with(|| SidebarItem::new(remote, None, RefType::Remote))
                        .children
                        .push(SidebarItem::from_ref(ref_name, ref_type));
                }
                RefType::Remote => {
                    let remote = ref_name.short_name().to_string();
                    remote_items
                        .entry(remote.clone())
                        .or_insert_with(|| SidebarItem::new(remote, None, RefType::Remote))
                        .ref_name = Some(ref_name);
                }
                RefType::Unknown => {
                    tracing::trace!(ref_name = %ref_name, "ref not shown in sidebar");
                }
            }
        }

        groups[SidebarRoot::Remotes.index()].items = remote_items.into_values().collect();
        groups[SidebarRoot::Stashes.index()].items = stashes
            .iter()
            .map(|stash| SidebarItem::new(stash.to_string(), None, RefType::Unknown))
            .collect();

        Self { groups }
    }

    pub fn groups(&self) -> &[SidebarGroup; 4] {
        &self.groups
    }

    pub fn group(&self, root: SidebarRoot) -> &SidebarGroup {
        &self.groups[root.index()]
    }

    /// Section titles in display order
    pub fn roots(&self) -> Vec<SidebarRoot> {
        self.groups.iter().map(|group| group.root).collect()
    }

    pub fn render(&self, writer: &mut dyn std::io::Write) -> anyhow::Result<()> {
        for group in &self.groups {
            writeln!(writer, "{}", group.root.title().bold())?;
            for item in &group.items {
                Self::render_item(writer, item, 1)?;
            }
        }

        Ok(())
    }

    fn render_item(
        writer: &mut dyn std::io::Write,
        item: &SidebarItem,
        depth: usize,
    ) -> anyhow::Result<()> {
        let indent = INDENT.repeat(depth);

        if item.is_active() {
            writeln!(writer, "{}* {}", indent, item.title.green())?;
        } else {
            writeln!(writer, "{}  {}", indent, item.title)?;
        }

        for child in &item.children {
            Self::render_item(writer, child, depth + 1)?;
        }

        Ok(())
    }
}
