use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn session(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("contentcraft").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_dir.join("config.json"));
    cmd
}

#[test]
fn test_create_and_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    session(temp_dir.path())
        .arg("--no-samples")
        .write_stdin(
            "title Getting Started with ContentCraft!\n\
             status published\n\
             category tutorial\n\
             tag add intro\n\
             save\n\
             list\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Tag added: intro"))
        .stdout(predicate::str::contains("Content created successfully!"))
        .stdout(predicate::str::contains("1. Getting Started with ContentCraft!"))
        .stdout(predicate::str::contains("published"));
}

#[test]
fn test_show_draft_slug() {
    let temp_dir = tempfile::tempdir().unwrap();

    session(temp_dir.path())
        .arg("--no-samples")
        .write_stdin("title Getting Started with ContentCraft!\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("getting-started-with-contentcraft"))
        .stdout(predicate::str::contains("New content"));
}

#[test]
fn test_text_fields_keep_their_spacing() {
    let temp_dir = tempfile::tempdir().unwrap();

    session(temp_dir.path())
        .arg("--no-samples")
        .write_stdin(
            "title Hello    World\n\
             body line  one\n\
             seo-title Hello \t World\n\
             save\n\
             edit 1\n\
             show\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Content created successfully!"))
        .stdout(predicate::str::contains("Hello    World"))
        .stdout(predicate::str::contains("line  one"))
        .stdout(predicate::str::contains("Hello \t World"))
        .stdout(predicate::str::contains("hello-world"));
}

#[test]
fn test_tag_add_reports_duplicates() {
    let temp_dir = tempfile::tempdir().unwrap();

    session(temp_dir.path())
        .arg("--no-samples")
        .write_stdin("tag add release  notes\ntag add release  notes\ntag rm intro\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tag added: release  notes"))
        .stdout(predicate::str::contains("Tag already present: release  notes"))
        .stdout(predicate::str::contains("Tag not found: intro"));
}

#[test]
fn test_empty_title_is_rejected_and_session_continues() {
    let temp_dir = tempfile::tempdir().unwrap();

    session(temp_dir.path())
        .arg("--no-samples")
        .write_stdin("save\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a content title"))
        .stdout(predicate::str::contains("No content yet"));
}

#[test]
fn test_samples_search_and_filter() {
    let temp_dir = tempfile::tempdir().unwrap();

    session(temp_dir.path())
        .write_stdin("list --search guide\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Advanced Content Management"))
        .stdout(predicate::str::contains("Getting Started").not());

    session(temp_dir.path())
        .write_stdin("list --status published\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Getting Started with ContentCraft"))
        .stdout(predicate::str::contains("2024-01-15"))
        .stdout(predicate::str::contains("Advanced").not());
}

#[test]
fn test_edit_update_and_delete() {
    let temp_dir = tempfile::tempdir().unwrap();

    session(temp_dir.path())
        .write_stdin(
            "edit 2\n\
             title Advanced Content Management, Revised\n\
             save\n\
             delete 1\n\
             list\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Content loaded for editing"))
        .stdout(predicate::str::contains("Content updated successfully!"))
        .stdout(predicate::str::contains("Content deleted successfully!"))
        .stdout(predicate::str::contains(
            "1. Advanced Content Management, Revised",
        ))
        .stdout(predicate::str::contains("Getting Started").not());
}

#[test]
fn test_deleting_edit_target_clears_editor() {
    let temp_dir = tempfile::tempdir().unwrap();

    session(temp_dir.path())
        .write_stdin("edit 1\ndelete 1\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("the editor has been cleared"))
        .stdout(predicate::str::contains("New content"));
}

#[test]
fn test_image_upload_and_stats() {
    let temp_dir = tempfile::tempdir().unwrap();

    session(temp_dir.path())
        .write_stdin("image upload cover.png\nimage upload notes.txt\nstats\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Image uploaded successfully!"))
        .stdout(predicate::str::contains("notes.txt is not an image"))
        .stdout(predicate::str::contains("Media assets    5"))
        .stdout(predicate::str::contains("Content items   2"));
}

#[test]
fn test_unknown_command_and_quit() {
    let temp_dir = tempfile::tempdir().unwrap();

    session(temp_dir.path())
        .write_stdin("frobnicate\nquit\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("frobnicate"))
        .stdout(predicate::str::contains("Getting Started").not());
}

#[test]
fn test_config_file_is_honored() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "seed_samples": false, "preserve_manual_slug": true }"#,
    )
    .unwrap();

    session(temp_dir.path())
        .write_stdin("slug my-slug\ntitle Another Title\nshow\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("my-slug (manual)"))
        .stdout(predicate::str::contains("No content yet"));
}

#[test]
fn test_malformed_config_fails_start() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{ nope").unwrap();

    session(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
