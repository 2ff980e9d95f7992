use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shelf(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("linkshelf").unwrap();
    cmd.env("LINKSHELF_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("LINKSHELF_LOG");
    cmd
}

#[test]
fn empty_shelf_says_so() {
    let home = tempfile::tempdir().unwrap();
    shelf(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Your shelf is empty"));
}

#[test]
fn added_links_are_listed_newest_first() {
    let home = tempfile::tempdir().unwrap();
    shelf(&home)
        .args(["add", "Rust", "rust-lang.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Link added: Rust (https://rust-lang.org)"));
    shelf(&home)
        .args(["add", "Docs", "https://docs.rs"])
        .assert()
        .success();

    let output = shelf(&home).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let docs = stdout.find("Docs").unwrap();
    let rust = stdout.find("Rust").unwrap();
    assert!(docs < rust);
    assert!(stdout.contains("https://rust-lang.org"));
}

#[test]
fn invalid_url_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    shelf(&home)
        .args(["add", "Broken", "http://"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid URL"));
    shelf(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Your shelf is empty"));
}

#[test]
fn search_filters_by_name() {
    let home = tempfile::tempdir().unwrap();
    for (name, url) in [
        ("Reddit", "reddit.com"),
        ("gitlab", "gitlab.com"),
        ("GitHub", "github.com"),
    ] {
        shelf(&home).args(["add", name, url]).assert().success();
    }

    shelf(&home)
        .args(["search", "git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub"))
        .stdout(predicate::str::contains("gitlab"))
        .stdout(predicate::str::contains("Reddit").not());

    shelf(&home)
        .args(["list", "--search", "lobsters"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No links match \"lobsters\"."));
}

#[test]
fn delete_with_yes_removes_link() {
    let home = tempfile::tempdir().unwrap();
    shelf(&home).args(["add", "Keep", "keep.example"]).assert().success();
    shelf(&home).args(["add", "Drop", "drop.example"]).assert().success();

    shelf(&home)
        .args(["rm", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Link deleted: Drop"));

    shelf(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep"))
        .stdout(predicate::str::contains("Drop").not());
}

#[test]
fn numbers_shown_by_search_delete_that_link() {
    let home = tempfile::tempdir().unwrap();
    for (name, url) in [
        ("Reddit", "reddit.com"),
        ("gitlab", "gitlab.com"),
        ("GitHub", "github.com"),
    ] {
        shelf(&home).args(["add", name, url]).assert().success();
    }

    shelf(&home)
        .args(["search", "lab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  2. "))
        .stdout(predicate::str::contains("  1. ").not());
    shelf(&home)
        .args(["search", "reddit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  3. "));

    shelf(&home)
        .args(["rm", "3", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Link deleted: Reddit"));
    shelf(&home)
        .args(["rm", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Link deleted: gitlab"));

    shelf(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub"))
        .stdout(predicate::str::contains("gitlab").not());
}

#[test]
fn theme_is_remembered() {
    let home = tempfile::tempdir().unwrap();
    shelf(&home)
        .args(["theme", "sepia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to sepia"));
    shelf(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("[sepia]"));
}

#[test]
fn favicon_lists_fallback_sources() {
    let home = tempfile::tempdir().unwrap();
    shelf(&home).args(["add", "Docs", "docs.rs"]).assert().success();
    shelf(&home)
        .args(["favicon", "1", "--failures", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("domain=docs.rs"))
        .stdout(predicate::str::contains("icons.duckduckgo.com/ip3/docs.rs.ico"))
        .stdout(predicate::str::contains("showing generic icon"));
}

#[test]
fn config_round_trip() {
    let home = tempfile::tempdir().unwrap();
    shelf(&home)
        .args(["config", "favicon-size", "32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("favicon-size set to 32"));
    shelf(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("favicon-size = 32"));
}

#[test]
fn corrupt_storage_fails_startup() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("storage.json"),
        r#"{"savedLinks": "not json"}"#,
    )
    .unwrap();
    shelf(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
