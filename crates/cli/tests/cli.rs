// ABOUTME: Integration tests for the hoops CLI binary.
// ABOUTME: Tests HTML file parsing, stdin input, multi-target envelopes and URL printing.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn hoops_cmd() -> Command {
    Command::cargo_bin("hoops").unwrap()
}

const ARENAS: &str = r#"<!DOCTYPE html>
<html><body>
<table>
    <thead><tr><th>Rank</th><th>Team</th><th>Conf</th><th>Arena</th><th>Alternate</th></tr></thead>
    <tbody>
        <tr><td>1</td><td>Duke</td><td>ACC</td><td>Cameron Indoor Stadium (9314)</td><td></td></tr>
    </tbody>
</table>
</body></html>"#;

const FANMATCH: &str = r#"<html><body>
<table id="fanmatch-table">
    <thead><tr><th>Game</th><th>Prediction</th></tr></thead>
    <tbody>
        <tr><td>233 Rice 77, 273 FIU 70 [66]</td><td>Rice 74-70 (64%) [67]</td><td>final</td><td>Houston, TX</td><td>40.2</td><td>1</td><td>2.0</td></tr>
    </tbody>
</table>
</body></html>"#;

#[test]
fn parse_arenas_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("arenas.html");
    fs::write(&html_path, ARENAS).unwrap();

    hoops_cmd()
        .arg("arenas")
        .arg(&html_path)
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""Arena":"Cameron Indoor Stadium""#))
        .stdout(predicate::str::contains(r#""Arena.Capacity":"9314""#))
        .stdout(predicate::str::contains(r#""Alternate.Capacity":"""#));
}

#[test]
fn parse_fanmatch_from_stdin() {
    hoops_cmd()
        .args(["fanmatch", "-", "--compact"])
        .write_stdin(FANMATCH)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""Winner":"Rice""#))
        .stdout(predicate::str::contains(r#""ActualMOV":7"#))
        .stdout(predicate::str::contains(r#""Possessions":66"#));
}

#[test]
fn fanmatch_summary() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("fanmatch.html");
    fs::write(&html_path, FANMATCH).unwrap();

    hoops_cmd()
        .arg("fanmatch")
        .arg(&html_path)
        .args(["--summary", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""favorite_wins":1"#))
        .stdout(predicate::str::contains(r#""mean_abs_mov_error":3.0"#));
}

#[test]
fn multiple_targets_output_envelope() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("good.html");
    let bad = temp_dir.path().join("bad.html");
    fs::write(&good, ARENAS).unwrap();
    fs::write(&bad, "<html><body><p>Please log in</p></body></html>").unwrap();

    let output = hoops_cmd()
        .arg("arenas")
        .arg(&good)
        .arg(&bad)
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["total_pages"], 2);
    assert_eq!(value["parsed"], 1);
    assert_eq!(value["failed"], 1);
    assert_eq!(value["pages"][1]["ok"], false);
    assert!(value["pages"][1]["error"]
        .as_str()
        .unwrap()
        .contains("no matching table"));
}

#[test]
fn raw_table_with_ranked_headers() {
    let html = r#"<table>
        <thead><tr><th>Player</th><th>ORtg</th><th>ORtg</th></tr></thead>
        <tbody><tr><td>Zach Edey</td><td>130.1</td><td>2</td></tr></tbody>
    </table>"#;

    hoops_cmd()
        .args(["table", "-", "--headers", "ranked", "--compact"])
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""ORtg.Rank":"2""#));
}

#[test]
fn print_url_for_season() {
    hoops_cmd()
        .args(["team-stats", "--defense", "--season", "2020", "--print-url"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://kenpom.com/teamstats.php?od=d&y=2020",
        ));
}

#[test]
fn team_url_requires_team() {
    hoops_cmd()
        .args(["schedule", "--print-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--team is required"));
}

#[test]
fn missing_file_is_reported() {
    hoops_cmd()
        .args(["ratings", "/nonexistent/page.html"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("file not found"));
}

#[test]
fn old_season_logs_warning() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("arenas.html");
    fs::write(&html_path, ARENAS).unwrap();

    hoops_cmd()
        .arg("arenas")
        .arg(&html_path)
        .args(["--season", "2005"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("season predates the page"));
}
