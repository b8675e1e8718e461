//! Integration tests for the Bookcase CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

/// Write a catalog of `count` books to a temp file
///
/// Even-numbered books are by "Jane Austen" (Romance), odd ones by
/// "Mary Shelley" (Gothic, Romance).
fn create_test_catalog(dir: &TempDir, count: usize) -> std::path::PathBuf {
    let books: Vec<Value> = (0..count)
        .map(|i| {
            let (author, genres) = if i % 2 == 0 {
                ("a1", vec!["g1"])
            } else {
                ("a2", vec!["g2", "g1"])
            };
            json!({
                "id": format!("b{}", i),
                "title": format!("Volume {}", i),
                "author": author,
                "image": format!("https://covers.example/{}.jpg", i),
                "published": "1818-01-01T00:00:00.000Z",
                "description": format!("Description of volume {}.", i),
                "genres": genres,
            })
        })
        .collect();
    let catalog = json!({
        "books": books,
        "authors": { "a1": "Jane Austen", "a2": "Mary Shelley" },
        "genres": { "g1": "Romance", "g2": "Gothic" },
    });

    let path = dir.path().join("catalog.json");
    fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap())
        .expect("Failed to write test catalog");
    path
}

fn bookcase() -> Command {
    let mut cmd = Command::cargo_bin("bookcase-cli").unwrap();
    cmd.env_remove("BOOKCASE_CATALOG")
        .env_remove("BOOKCASE_PAGE_SIZE")
        .env_remove("BOOKCASE_THEME");
    cmd
}

#[test]
fn test_help() {
    bookcase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("shell"));
}

#[test]
fn test_version() {
    bookcase()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookcase"));
}

#[test]
fn test_search_help() {
    bookcase()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search the catalog"))
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--author"))
        .stdout(predicate::str::contains("--genre"));
}

#[test]
fn test_browse_without_catalog() {
    bookcase()
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No catalog given"));
}

#[test]
fn test_browse_nonexistent_catalog() {
    bookcase()
        .args(["--catalog", "/nonexistent/catalog.json", "browse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open catalog"));
}

#[test]
fn test_browse_invalid_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{ "books": [{ "id": "b1", "title": "T", "author": "ghost", "image": "",
            "published": "", "description": "", "genres": [] }],
            "authors": {}, "genres": {} }"#,
    )
    .unwrap();

    bookcase()
        .args(["--catalog", path.to_str().unwrap(), "browse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_browse_first_page() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 40);

    bookcase()
        .args(["--catalog", catalog.to_str().unwrap(), "browse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b0  Volume 0 by Jane Austen [Romance]"))
        .stdout(predicate::str::contains("b35  Volume 35"))
        .stdout(predicate::str::contains("b36  Volume 36").not())
        .stdout(predicate::str::contains("Show more (4)"));
}

#[test]
fn test_browse_two_pages_json() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 40);

    let output = bookcase()
        .args([
            "--catalog",
            catalog.to_str().unwrap(),
            "browse",
            "--pages",
            "5",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let pages: Value = serde_json::from_slice(&output.stdout).unwrap();
    let pages = pages.as_array().unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0]["previews"].as_array().unwrap().len(), 36);
    assert_eq!(pages[0]["show_more"]["remaining"], 4);
    assert_eq!(pages[1]["previews"].as_array().unwrap().len(), 4);
    assert_eq!(pages[1]["show_more"]["remaining"], 0);
}

#[test]
fn test_page_size_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 10);

    bookcase()
        .env("BOOKCASE_CATALOG", catalog.to_str().unwrap())
        .env("BOOKCASE_PAGE_SIZE", "4")
        .arg("browse")
        .assert()
        .success()
        .stdout(predicate::str::contains("b3  Volume 3"))
        .stdout(predicate::str::contains("b4  Volume 4").not())
        .stdout(predicate::str::contains("Show more (6)"));
}

#[test]
fn test_invalid_page_size() {
    bookcase()
        .args(["--page-size", "0", "theme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_zero_pages_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 5);

    bookcase()
        .args(["--catalog", catalog.to_str().unwrap(), "browse", "--pages", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pages must be at least 1"));

    bookcase()
        .args(["--catalog", catalog.to_str().unwrap(), "search", "-p", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pages must be at least 1"));
}

#[test]
fn test_unknown_theme_env_falls_back_to_day() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 3);

    bookcase()
        .env("BOOKCASE_THEME", "dusk")
        .args(["--catalog", catalog.to_str().unwrap(), "browse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b0  Volume 0"))
        .stderr(predicate::str::contains("Unknown theme: dusk"));

    bookcase()
        .env("BOOKCASE_THEME", "dusk")
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme:      day"));
}

#[test]
fn test_search_by_author_and_genre() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 10);

    bookcase()
        .args([
            "--catalog",
            catalog.to_str().unwrap(),
            "search",
            "--author",
            "Mary Shelley",
            "--genre",
            "Gothic",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("b1  Volume 1 by Mary Shelley [Gothic, Romance]"))
        .stdout(predicate::str::contains("by Jane Austen").not())
        .stdout(predicate::str::contains("Show more (0)"));
}

#[test]
fn test_search_title_case_insensitive() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 10);

    bookcase()
        .args([
            "--catalog",
            catalog.to_str().unwrap(),
            "search",
            "--title",
            "VOLUME 7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("b7  Volume 7"))
        .stdout(predicate::str::contains("b6  Volume 6").not());
}

#[test]
fn test_search_no_results() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 10);

    bookcase()
        .args([
            "--catalog",
            catalog.to_str().unwrap(),
            "search",
            "--title",
            "zzzznomatch",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_show_book() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 3);

    bookcase()
        .args(["--catalog", catalog.to_str().unwrap(), "show", "b2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Volume 2"))
        .stdout(predicate::str::contains("Jane Austen (1818)"))
        .stdout(predicate::str::contains("Description of volume 2."));
}

#[test]
fn test_show_unknown_book() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 3);

    bookcase()
        .args(["--catalog", catalog.to_str().unwrap(), "show", "b99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown book id: b99"));
}

#[test]
fn test_options() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 3);

    bookcase()
        .args(["--catalog", catalog.to_str().unwrap(), "options"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All Authors"))
        .stdout(predicate::str::contains("Mary Shelley"))
        .stdout(predicate::str::contains("All Genres"))
        .stdout(predicate::str::contains("Gothic"));
}

#[test]
fn test_theme() {
    bookcase()
        .args(["theme", "night"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Text:       255, 255, 255"))
        .stdout(predicate::str::contains("Background: 10, 10, 20"));

    bookcase()
        .env("BOOKCASE_THEME", "day")
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme:      day"));

    bookcase()
        .args(["theme", "dusk"])
        .assert()
        .failure();
}

#[test]
fn test_shell_session() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = create_test_catalog(&temp_dir, 40);

    bookcase()
        .args(["--catalog", catalog.to_str().unwrap(), "shell"])
        .write_stdin("more\nsearch author=Mary Shelley\nshow b5\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Show more (4)"))
        .stdout(predicate::str::contains("b39  Volume 39"))
        .stdout(predicate::str::contains("Mary Shelley (1818)"));
}
