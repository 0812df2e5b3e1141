use crate::common::command::{
    AUTHOR_TIMESTAMP, get_head_commit_sha, get_parent_commit_id, init_repository_dir,
    mygit_commit, repository_dir, run_mygit_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

const INITIAL_TREE_OID: &str = "5ff5692157e3baa13e4390cdf0bb002f79f9d789";
const INITIAL_COMMIT_OID: &str = "89829efba4b74796be8d8d5fe5b0456a0ca13cb6";

#[rstest]
fn root_commit_has_a_stable_oid(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        get_head_commit_sha(init_repository_dir.path())?,
        INITIAL_COMMIT_OID
    );

    Ok(())
}

#[rstest]
fn write_commit_object_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = stdout_of(
        init_repository_dir.path(),
        &["cat-file", "-p", INITIAL_COMMIT_OID],
    )?;

    assert_eq!(
        payload,
        format!(
            "tree {INITIAL_TREE_OID}\nauthor Unknown Author <unknown@example.com> {AUTHOR_TIMESTAMP}\n\nInitial commit\n"
        )
    );

    Ok(())
}

#[rstest]
fn commit_summary_marks_the_root_commit(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_mygit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("2.txt"), "two".to_string()));
    run_mygit_command(dir, &["add", "1.txt", "2.txt"])
        .assert()
        .success();

    mygit_commit(dir, "Initial commit\n\nWith a body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[main \(root-commit\) [0-9a-f]{7}\] Initial commit\n$",
        )?);

    Ok(())
}

#[rstest]
fn second_commit_links_to_its_parent(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("3.txt"), "three".to_string()));
    run_mygit_command(dir, &["add", "3.txt"]).assert().success();

    mygit_commit(dir, "Second commit")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[main [0-9a-f]{7}\] Second commit\n$")?);

    let head = get_head_commit_sha(dir)?;
    assert_eq!(get_parent_commit_id(dir, &head)?, INITIAL_COMMIT_OID);

    // only the newly staged file is part of the second snapshot
    run_mygit_command(dir, &["ls-tree", &head])
        .assert()
        .success()
        .stdout("100644 b802f384302cb24fbab0a44997e820bf2e8507bb 3.txt\n");

    Ok(())
}

#[rstest]
fn commit_clears_the_index(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let index_path = init_repository_dir.path().join(".mygit").join("index");
    let index = std::fs::read_to_string(index_path).unwrap_or_default();

    assert_eq!(index, "");

    Ok(())
}

#[rstest]
fn committing_an_empty_index_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    mygit_commit(dir, "Nothing here")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to commit"));

    assert_eq!(get_head_commit_sha(dir)?, INITIAL_COMMIT_OID);

    Ok(())
}

#[rstest]
fn committing_outside_a_repository_fails(repository_dir: TempDir) {
    mygit_commit(repository_dir.path(), "Nowhere")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a mygit repository"));
}

#[rstest]
fn commit_uses_the_configured_author(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_mygit_command(dir, &["init"]).assert().success();
    run_mygit_command(dir, &["config", "user.name", "Ada Lovelace"])
        .assert()
        .success();
    run_mygit_command(dir, &["config", "user.email", "ada@example.com"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    run_mygit_command(dir, &["add", "1.txt"]).assert().success();

    mygit_commit(dir, "Authored").assert().success();

    let payload = stdout_of(dir, &["cat-file", "-p", &get_head_commit_sha(dir)?])?;
    assert!(payload.contains(&format!(
        "\nauthor Ada Lovelace <ada@example.com> {AUTHOR_TIMESTAMP}\n"
    )));

    Ok(())
}

#[rstest]
#[case("1672574400")]
#[case("2023-01-01 12:00:00 +0000")]
#[case("2023-01-01 14:00:00 +0200")]
fn author_date_accepts_timestamps_and_dates(
    repository_dir: TempDir,
    #[case] author_date: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_mygit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    run_mygit_command(dir, &["add", "1.txt"]).assert().success();

    run_mygit_command(dir, &["commit", "-m", "Dated"])
        .env("MYGIT_AUTHOR_DATE", author_date)
        .assert()
        .success();

    let payload = stdout_of(dir, &["cat-file", "-p", &get_head_commit_sha(dir)?])?;
    assert!(payload.contains(&format!("> {AUTHOR_TIMESTAMP}\n")));

    Ok(())
}

#[rstest]
fn invalid_author_date_is_rejected(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_mygit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    run_mygit_command(dir, &["add", "1.txt"]).assert().success();

    run_mygit_command(dir, &["commit", "-m", "Dated"])
        .env("MYGIT_AUTHOR_DATE", "yesterday")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid MYGIT_AUTHOR_DATE"));
}

#[rstest]
fn cli_trims_the_message_argument(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_mygit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    run_mygit_command(dir, &["add", "1.txt"]).assert().success();

    mygit_commit(dir, "  Padded  \n").assert().success();

    let payload = stdout_of(dir, &["cat-file", "-p", &get_head_commit_sha(dir)?])?;
    assert!(payload.ends_with("\n\nPadded\n"));

    Ok(())
}
