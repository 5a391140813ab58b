use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const FOX: &str = "The quick brown fox jumps over the lazy dog.";
pub const PIG: &str = "The quick brown fox leaps over my wierd big lazy pig.";

pub const ANCESTOR: &str = "one two three four five six seven eight nine ten";

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// `a.txt` holds [`FOX`] and `b.txt` holds [`PIG`]
#[fixture]
pub fn fox_and_pig_dir(workspace_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(workspace_dir.path().join("a.txt"), FOX.into()));
    write_file(FileSpec::new(workspace_dir.path().join("b.txt"), PIG.into()));

    workspace_dir
}

/// `base.txt` holds [`ANCESTOR`]
#[fixture]
pub fn ancestor_dir(workspace_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        workspace_dir.path().join("base.txt"),
        ANCESTOR.into(),
    ));

    workspace_dir
}

pub fn run_bdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bdiff").expect("Failed to find bdiff binary");
    cmd.envs(vec![("RUST_LOG", "warn")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
