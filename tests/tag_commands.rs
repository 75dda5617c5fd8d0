use crate::common::command::run_xit_command;
use crate::common::repository::{read_ref, repository_dir, write_git_file};
use crate::common::{OID_A, OID_B, OID_C};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use rstest::rstest;

mod common;

#[rstest]
fn create_tag_at_head(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_xit_command(repository_dir.path(), &["tag", "v1.0"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        read_ref(repository_dir.path(), "refs/tags/v1.0"),
        Some(OID_A.to_string())
    );

    run_xit_command(repository_dir.path(), &["ref-type", "refs/tags/v1.0"])
        .assert()
        .success()
        .stdout(predicate::eq("tag\n"));

    Ok(())
}

#[rstest]
fn create_tag_at_object_id(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_xit_command(repository_dir.path(), &["tag", "release/2024", OID_B])
        .assert()
        .success();

    assert_eq!(
        read_ref(repository_dir.path(), "refs/tags/release/2024"),
        Some(OID_B.to_string())
    );

    Ok(())
}

#[rstest]
fn create_tag_while_locked_reports_write_lock(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_git_file(repository_dir.path(), "refs/tags/v2.lock", "");

    run_xit_command(repository_dir.path(), &["tag", "v2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("XTErrorDomainXit code 1"));

    Ok(())
}

#[rstest]
fn delete_packed_tag(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_git_file(
        repository_dir.path(),
        "packed-refs",
        &format!("# pack-refs with: peeled\n{OID_C} refs/tags/v0.9\n^{OID_B}\n"),
    );

    run_xit_command(repository_dir.path(), &["tag", "-d", "v0.9"])
        .assert()
        .success()
        .stdout(predicate::eq("Deleted tag 'v0.9' (was 3333333)\n"));

    run_xit_command(repository_dir.path(), &["sidebar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v0.9").not());

    Ok(())
}
