use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_DATE: &str = "2023-01-01 12:00:00 +0000";
pub const AUTHOR_TIMESTAMP: i64 = 1672574400;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with `1.txt` and `2.txt` committed as "Initial commit"
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_mygit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(repository_dir.path().join("2.txt"), "two".to_string());
    write_file(file2);

    run_mygit_command(repository_dir.path(), &["add", "1.txt", "2.txt"])
        .assert()
        .success();

    mygit_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

#[fixture]
pub fn repository_with_multiple_commits(repository_dir: TempDir) -> TempDir {
    run_mygit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    for (index, message) in ["First commit", "Second commit", "Third commit"]
        .iter()
        .enumerate()
    {
        let file = FileSpec::new(
            repository_dir.path().join(format!("file{}.txt", index + 1)),
            format!("content {}", index + 1),
        );
        write_file(file);

        run_mygit_command(
            repository_dir.path(),
            &["add", &format!("file{}.txt", index + 1)],
        )
        .assert()
        .success();
        mygit_commit(repository_dir.path(), message)
            .assert()
            .success();
    }

    repository_dir
}

pub fn run_mygit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("mygit").expect("Failed to find mygit binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("MYGIT_AUTHOR_DATE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn mygit_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_mygit_command(dir, &["commit", "-m", message]);
    cmd.env("MYGIT_AUTHOR_DATE", AUTHOR_DATE);
    cmd
}

pub fn stdout_of(dir: &Path, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_mygit_command(dir, args).assert().success();

    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}

/// Read the tip of the current branch straight from the ref files
pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_content = std::fs::read_to_string(dir.join(".mygit").join("HEAD"))?;
    let ref_path = head_content
        .trim()
        .strip_prefix("ref: ")
        .ok_or("HEAD is not a symbolic ref")?;

    let commit_sha = std::fs::read_to_string(dir.join(".mygit").join(ref_path))?;
    Ok(commit_sha.trim().to_string())
}

pub fn get_parent_commit_id(
    dir: &Path,
    commit_id: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let payload = stdout_of(dir, &["cat-file", "-p", commit_id])?;

    payload
        .lines()
        .find_map(|line| line.strip_prefix("parent "))
        .map(str::to_string)
        .ok_or_else(|| "No parent found".into())
}

pub fn object_path(dir: &Path, oid: &str) -> std::path::PathBuf {
    dir.join(".mygit")
        .join("objects")
        .join(&oid[..2])
        .join(&oid[2..])
}
