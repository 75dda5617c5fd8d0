//! Git references (branches, tags, remote-tracking refs, HEAD)
//!
//! References live in two places inside the git directory:
//! - Loose refs: one file per ref under `refs/`, containing either a 40-character
//!   object ID or `ref: <full name>` for symbolic refs
//! - Packed refs: `packed-refs`, one `<oid> <full name>` pair per line, with
//!   `# ...` header lines and `^<oid>` lines peeling the preceding annotated tag
//!
//! Loose refs take precedence over packed ones with the same name.
//!
//! ## Locking
//!
//! Writers follow git's lock file convention: the new content is written to
//! `<ref>.lock`, created exclusively, then renamed over the ref. A lock file
//! that already exists means another writer holds the ref, and the update
//! fails with a write-lock error in the xit domain.

use crate::artifacts::errors::XitError;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::refs::ref_name::RefName;
use crate::artifacts::refs::{
    HEAD_REF_NAME, HEADS_PREFIX, LOCK_SUFFIX, REFS_PREFIX, REMOTES_PREFIX, SYMREF_REGEX,
    TAGS_PREFIX,
};
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::collections::BTreeMap;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PACKED_REFS_FILE: &str = "packed-refs";

/// Symbolic refs deeper than this are treated as a loop
const MAX_SYMREF_DEPTH: usize = 5;

/// Git references manager
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef { ref_name: String },
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn parse(content: &str) -> anyhow::Result<Option<SymRefOrOid>> {
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                ref_name: symref_match[1].to_string(),
            }))
        } else {
            Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(
                content.to_string(),
            )?)))
        }
    }

    fn read(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;

        Self::parse(&content).with_context(|| format!("malformed ref file at {:?}", path))
    }
}

/// Exclusive hold on a ref through its `<ref>.lock` file
///
/// The lock file is removed on drop while this process still owns it, that
/// is until `commit` has renamed it over the target.
struct RefLock {
    lock_path: PathBuf,
    target_path: PathBuf,
    file: Option<std::fs::File>,
    held: bool,
}

impl RefLock {
    fn acquire(target_path: &Path) -> anyhow::Result<Self> {
        let parent = target_path
            .parent()
            .with_context(|| format!("ref path {:?} has no parent directory", target_path))?;
        std::fs::create_dir_all(parent)
            .map_err(XitError::from)
            .with_context(|| format!("failed to create ref directory {:?}", parent))?;

        Self::acquire_in_place(target_path)
    }

    /// Take the lock without creating missing parent directories
    fn acquire_in_place(target_path: &Path) -> anyhow::Result<Self> {
        let mut lock_path = target_path.as_os_str().to_owned();
        lock_path.push(LOCK_SUFFIX);
        let lock_path = PathBuf::from(lock_path);

        let file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
        {
            Ok(file) => file,
            Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => {
                tracing::debug!(lock_path = ?lock_path, "ref is locked by another writer");
                return Err(XitError::write_lock(&lock_path).into());
            }
            Err(error) => {
                return Err(anyhow::Error::new(XitError::from(error)))
                    .with_context(|| format!("failed to create lock file {:?}", lock_path));
            }
        };

        tracing::trace!(lock_path = ?lock_path, "acquired ref lock");

        Ok(Self {
            lock_path,
            target_path: target_path.to_path_buf(),
            file: Some(file),
            held: true,
        })
    }

    /// Write `content` to the lock file and move it over the target
    fn commit(mut self, content: &str) -> anyhow::Result<()> {
        let mut file = self
            .file
            .take()
            .context("ref lock was already released")?;

        {
            let mut guard = file_guard::lock(&mut file, Lock::Exclusive, 0, 1)
                .map_err(XitError::from)
                .with_context(|| format!("failed to lock {:?}", self.lock_path))?;
            guard
                .deref_mut()
                .write_all(content.as_bytes())
                .map_err(XitError::from)
                .with_context(|| format!("failed to write {:?}", self.lock_path))?;
        }
        drop(file);

        std::fs::rename(&self.lock_path, &self.target_path)
            .map_err(XitError::from)
            .with_context(|| {
                format!(
                    "failed to move {:?} into place at {:?}",
                    self.lock_path, self.target_path
                )
            })?;
        self.held = false;
        tracing::trace!(target_path = ?self.target_path, "committed ref lock");

        Ok(())
    }
}

impl Drop for RefLock {
    fn drop(&mut self) {
        if self.held {
            let _ = std::fs::remove_file(&self.lock_path);
        }
    }
}

impl Refs {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Short name of the branch HEAD points at
    ///
    /// # Returns
    ///
    /// None when HEAD is detached, missing, or points outside `refs/heads/`
    pub fn current_branch(&self) -> anyhow::Result<Option<String>> {
        match SymRefOrOid::read(&self.head_path())? {
            Some(SymRefOrOid::SymRef { ref_name }) => Ok(ref_name
                .strip_prefix(HEADS_PREFIX)
                .filter(|branch| !branch.is_empty())
                .map(str::to_string)),
            Some(SymRefOrOid::Oid(_)) | None => Ok(None),
        }
    }

    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_ref(&RefName::try_parse(HEAD_REF_NAME.to_string())?)
    }

    /// Resolve a reference to the object it points at
    ///
    /// Follows symbolic references and falls back to `packed-refs` when no
    /// loose ref exists.
    pub fn read_ref(&self, ref_name: &RefName) -> anyhow::Result<Option<ObjectId>> {
        self.resolve(ref_name.as_ref_path(), 0)
    }

    fn resolve(&self, full_name: &str, depth: usize) -> anyhow::Result<Option<ObjectId>> {
        if depth > MAX_SYMREF_DEPTH {
            anyhow::bail!("symbolic ref chain too deep at {}", full_name);
        }

        match SymRefOrOid::read(&self.path.join(full_name))? {
            Some(SymRefOrOid::SymRef { ref_name }) => self.resolve(&ref_name, depth + 1),
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            None => Ok(self.read_packed_refs()?.remove(full_name)),
        }
    }

    /// Find the full reference a short name refers to
    ///
    /// Full names (`refs/...`) are looked up as given. Short names are tried in
    /// git's order: `refs/<name>`, `refs/tags/<name>`, `refs/heads/<name>`,
    /// `refs/remotes/<name>`. Candidates that are not valid ref names are
    /// never looked up.
    pub fn find_ref(&self, name: &str) -> anyhow::Result<Option<RefName>> {
        let candidates = if name.starts_with(REFS_PREFIX) {
            vec![name.to_string()]
        } else {
            [REFS_PREFIX, TAGS_PREFIX, HEADS_PREFIX, REMOTES_PREFIX]
                .iter()
                .map(|prefix| format!("{}{}", prefix, name))
                .collect()
        };
        let packed_refs = self.read_packed_refs()?;

        Ok(candidates
            .into_iter()
            .filter_map(|full_name| RefName::try_parse(full_name).ok())
            .find(|ref_name| {
                self.path.join(ref_name.as_ref_path()).is_file()
                    || packed_refs.contains_key(ref_name.as_ref_path())
            }))
    }

    pub fn ref_exists(&self, ref_name: &RefName) -> anyhow::Result<bool> {
        Ok(self.path.join(ref_name.as_ref_path()).is_file()
            || self
                .read_packed_refs()?
                .contains_key(ref_name.as_ref_path()))
    }

    /// Every reference under `refs/`, loose and packed, sorted by full name
    pub fn list_refs(&self) -> anyhow::Result<Vec<RefName>> {
        let mut full_names = self.read_packed_refs()?.into_keys().collect::<Vec<_>>();
        full_names.extend(self.list_loose_refs());
        full_names.sort();
        full_names.dedup();

        Ok(full_names
            .into_iter()
            .filter_map(|full_name| match RefName::try_parse(full_name.clone()) {
                Ok(ref_name) => Some(ref_name),
                Err(error) => {
                    tracing::warn!(%full_name, %error, "skipping invalid ref name");
                    None
                }
            })
            .collect())
    }

    fn list_loose_refs(&self) -> Vec<String> {
        WalkDir::new(self.refs_path())
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&*self.path).ok()?;
                let full_name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");

                (!full_name.ends_with(LOCK_SUFFIX)).then_some(full_name)
            })
            .collect()
    }

    fn read_packed_refs(&self) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        let path = self.packed_refs_path();
        if !path.is_file() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read packed refs at {:?}", path))?;

        Ok(content
            .lines()
            .filter(|line| !line.starts_with('#') && !line.starts_with('^'))
            .filter_map(|line| {
                let (oid, full_name) = line.trim().split_once(' ')?;
                match ObjectId::try_parse(oid.to_string()) {
                    Ok(oid) => Some((full_name.to_string(), oid)),
                    Err(error) => {
                        tracing::warn!(%line, %error, "skipping malformed packed ref");
                        None
                    }
                }
            })
            .collect())
    }

    /// Create a new reference pointing at `oid`
    ///
    /// # Errors
    ///
    /// Fails if the reference already exists, or with a write-lock
    /// [`XitError`] if another writer holds `<ref>.lock`.
    pub fn create_ref(&self, ref_name: &RefName, oid: &ObjectId) -> anyhow::Result<()> {
        let ref_path = self.path.join(ref_name.as_ref_path());
        let lock = RefLock::acquire(&ref_path)?;

        if self.ref_exists(ref_name)? {
            anyhow::bail!("ref {} already exists", ref_name);
        }

        lock.commit(&format!("{}\n", oid))?;
        tracing::debug!(ref_name = %ref_name, oid = %oid, "created ref");

        Ok(())
    }

    /// Delete a reference, loose or packed
    ///
    /// # Returns
    ///
    /// The object ID the reference pointed at
    pub fn delete_ref(&self, ref_name: &RefName) -> anyhow::Result<ObjectId> {
        if !self.ref_exists(ref_name)? {
            anyhow::bail!("ref {} does not exist", ref_name);
        }

        let ref_path = self.path.join(ref_name.as_ref_path());
        let result = self.delete_locked_ref(ref_name, &ref_path);
        self.prune_empty_parent_dirs(&ref_path)?;

        let oid = result?;
        tracing::debug!(ref_name = %ref_name, oid = %oid, "deleted ref");

        Ok(oid)
    }

    /// Remove the packed entry first, then the loose file, so a failure on
    /// `packed-refs.lock` leaves the ref untouched
    fn delete_locked_ref(&self, ref_name: &RefName, ref_path: &Path) -> anyhow::Result<ObjectId> {
        let lock = RefLock::acquire(ref_path)?;

        let oid = self
            .read_ref(ref_name)?
            .ok_or_else(|| anyhow::anyhow!("ref {} does not exist", ref_name))?;

        if self.read_packed_refs()?.contains_key(ref_name.as_ref_path()) {
            self.remove_packed_ref(ref_name)?;
        }
        if ref_path.is_file() {
            std::fs::remove_file(ref_path)
                .map_err(XitError::from)
                .with_context(|| format!("failed to delete ref file at {:?}", ref_path))?;
        }
        drop(lock);

        Ok(oid)
    }

    fn remove_packed_ref(&self, ref_name: &RefName) -> anyhow::Result<()> {
        let path = self.packed_refs_path();
        let lock = RefLock::acquire_in_place(&path)?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read packed refs at {:?}", path))?;

        let mut kept = Vec::new();
        let mut skipping_peel = false;
        for line in content.lines() {
            if line.starts_with('^') && skipping_peel {
                continue;
            }
            skipping_peel = line
                .split_once(' ')
                .is_some_and(|(_, full_name)| full_name == ref_name.as_ref_path());
            if !skipping_peel {
                kept.push(line);
            }
        }

        let mut new_content = kept.join("\n");
        new_content.push('\n');
        lock.commit(&new_content)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent.starts_with(&*self.refs_path())
            && parent != &*self.refs_path()
            && parent != &*self.heads_path()
            && parent != &*self.tags_path()
            && parent.is_dir()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty ref directory at {:?}", parent)
            })?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    pub fn tags_path(&self) -> Box<Path> {
        self.refs_path().join("tags").into_boxed_path()
    }

    pub fn packed_refs_path(&self) -> Box<Path> {
        self.path.join(PACKED_REFS_FILE).into_boxed_path()
    }
}
