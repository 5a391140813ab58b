use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::command::{fox_and_pig_dir, run_bdiff_command, workspace_dir};
use common::file::{FileSpec, write_file};

#[rstest]
#[case(&[], "20\n")]
#[case(&["--a-offset", "5", "--b-offset", "5"], "15\n")]
#[case(&["--a-offset", "20", "--b-offset", "20"], "0\n")]
#[case(&["--a-offset", "100", "--b-offset", "0"], "0\n")]
fn same_len_prints_common_run_length(
    fox_and_pig_dir: TempDir,
    #[case] offsets: &[&str],
    #[case] expected: &'static str,
) {
    let mut args = vec!["same-len", "a.txt", "b.txt"];
    args.extend_from_slice(offsets);

    run_bdiff_command(fox_and_pig_dir.path(), &args)
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[rstest]
fn rev_same_len_prints_common_suffix_length(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("fox.txt"),
        "The quick brown  fox jumps over the lazy dog.".into(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("dog.txt"),
        "The quick brown  dog jumps over the lazy dog.".into(),
    ));

    run_bdiff_command(workspace_dir.path(), &["rev-same-len", "fox.txt", "dog.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("25\n"));
}

#[rstest]
fn rev_same_len_in_utf8_mode_keeps_whole_characters(workspace_dir: TempDir) {
    // "é" and "©" share their trailing byte
    write_file(FileSpec::new(workspace_dir.path().join("a.txt"), "café".into()));
    write_file(FileSpec::new(workspace_dir.path().join("b.txt"), "caf©".into()));

    run_bdiff_command(workspace_dir.path(), &["rev-same-len", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("1\n"));
    run_bdiff_command(workspace_dir.path(), &["rev-same-len", "--utf8", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("0\n"));
}

#[rstest]
fn diff_len_prints_changed_region(fox_and_pig_dir: TempDir) {
    run_bdiff_command(
        fox_and_pig_dir.path(),
        &["diff-len", "a.txt", "b.txt", "--a-offset", "20", "--b-offset", "20"],
    )
    .assert()
    .success()
    .stdout(predicate::eq("3 3\n"));
}

#[rstest]
fn plumbing_on_a_missing_file_fails(workspace_dir: TempDir) {
    write_file(FileSpec::new(workspace_dir.path().join("a.txt"), "a".into()));

    run_bdiff_command(workspace_dir.path(), &["same-len", "a.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to read"))
        .stderr(predicate::str::contains("missing.txt"));
}
