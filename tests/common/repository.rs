use crate::common::OID_A;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild, PathCreateDir};
use rstest::fixture;
use std::path::Path;

/// A repository on `main` with a single branch and empty tag/remote namespaces
#[fixture]
pub fn repository_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    dir.child(".git/HEAD")
        .write_str("ref: refs/heads/main\n")
        .expect("Failed to write HEAD");
    dir.child(".git/refs/tags")
        .create_dir_all()
        .expect("Failed to create tags directory");
    write_ref(dir.path(), "refs/heads/main", OID_A);

    dir
}

pub fn write_ref(dir: &Path, full_name: &str, content: &str) {
    let ref_path = dir.join(".git").join(full_name);
    if let Some(parent) = ref_path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&ref_path, format!("{}\n", content))
        .unwrap_or_else(|e| panic!("Failed to write ref {:?}: {}", ref_path, e));
}

pub fn write_git_file(dir: &Path, relative_path: &str, content: &str) {
    let path = dir.join(".git").join(relative_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write {:?}: {}", path, e));
}

pub fn read_ref(dir: &Path, full_name: &str) -> Option<String> {
    std::fs::read_to_string(dir.join(".git").join(full_name))
        .ok()
        .map(|content| content.trim().to_string())
}
