use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn blogroll_cmd() -> Command {
    Command::cargo_bin("blogroll").unwrap()
}

#[test]
fn test_help_lists_commands() {
    blogroll_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("posts"))
        .stdout(predicate::str::contains("repos"))
        .stdout(predicate::str::contains("achievements"))
        .stdout(predicate::str::contains("clear-cache"));
}

#[test]
fn test_posts_help_shows_refresh_flag() {
    blogroll_cmd()
        .arg("posts")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--refresh"))
        .stdout(predicate::str::contains("Ignore the cached list and fetch again"));
}

#[test]
fn test_achievements_html() {
    let temp_dir = TempDir::new().unwrap();

    blogroll_cmd()
        .arg("achievements")
        .env("BLOGROLL_CACHE_PATH", temp_dir.path().join("cache.db"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"<ul class="achievements-list">"#))
        .stdout(predicate::str::contains("Pull Shark"))
        .stdout(predicate::str::contains(r#"<span class="achievement-tier">x3</span>"#));
}

#[test]
fn test_achievements_text() {
    blogroll_cmd()
        .args(["achievements", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starstruck (x2)"))
        .stdout(predicate::str::contains("Mars 2020 Contributor"));
}

#[test]
fn test_achievements_json() {
    let output = blogroll_cmd()
        .args(["achievements", "-f", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(6));
}

#[test]
fn test_invalid_timeout_is_reported() {
    blogroll_cmd()
        .arg("achievements")
        .env("BLOGROLL_HTTP_TIMEOUT_SECS", "forever")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BLOGROLL_HTTP_TIMEOUT_SECS"));
}

mod cache_integration {
    use super::*;

    #[test]
    fn test_clear_cache_creates_and_empties_store() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("cache.db");

        blogroll_cmd()
            .arg("clear-cache")
            .env("BLOGROLL_CACHE_PATH", &db_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache cleared."));

        assert!(db_path.exists());
    }

    #[test]
    fn test_unwritable_cache_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("missing").join("dir").join("cache.db");

        blogroll_cmd()
            .arg("clear-cache")
            .env("BLOGROLL_CACHE_PATH", &db_path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }
}
