//! Integration tests for the `lau` binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Corpus used across the tests, plus an empty project and a fake home.
fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    let corpus = temp.path().join("corpus");

    write(
        &corpus,
        "security/redteam-expert/README.md",
        "# Red team\n\nOffensive security reviewer.\n",
    );
    write(&corpus, "security/redteam-expert/default/AGENTS.md", "default redteam\n");
    write(&corpus, "security/redteam-expert/claude/CLAUDE.md", "claude redteam\n");
    write(&corpus, "security/redteam-expert/claude/.claude/agents/redteam.md", "agent\n");

    write(&corpus, "pythonic-expert/README.md", "Idiomatic Python reviewer.\n");
    write(&corpus, "pythonic-expert/default/AGENTS.md", "default python\n");
    write(&corpus, "pythonic-expert/openai/AGENTS.md", "openai python\n");
    write(&corpus, "pythonic-expert/windsurf/.windsurfrules", "windsurf python\n");

    write(&corpus, "data/expert/README.md", "Data.\n");
    write(&corpus, "data/expert/default/AGENTS.md", "data\n");
    write(&corpus, "ops/expert/README.md", "Ops.\n");
    write(&corpus, "ops/expert/default/AGENTS.md", "ops\n");

    write(&corpus, "half-done/README.md", "Only a claude tree.\n");
    write(&corpus, "half-done/claude/CLAUDE.md", "claude\n");

    fs::create_dir_all(temp.path().join("project")).unwrap();
    fs::create_dir_all(temp.path().join("home")).unwrap();
    temp
}

fn lau(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("lau"));
    cmd.env("HOME", temp.path().join("home"))
        .env("NO_COLOR", "1")
        .env_remove("LAU_CORPUS")
        .env_remove("RUST_LOG")
        .arg("--corpus")
        .arg(temp.path().join("corpus"))
        .arg("--project")
        .arg(temp.path().join("project"));
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("lau"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Deploy AI assistant templates"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("lau"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn list_shows_valid_templates_and_one_warning() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    lau(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("security/redteam-expert"))
        .stdout(predicate::str::contains("Idiomatic Python reviewer."))
        .stdout(predicate::str::contains("[default, openai, windsurf]"))
        .stdout(predicate::str::contains("half-done").not())
        .stderr(predicate::str::contains("half-done").count(1));
    Ok(())
}

#[test]
fn list_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    let output = lau(&temp).args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let ids: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["pythonic-expert", "data/expert", "ops/expert", "security/redteam-expert"]
    );
    Ok(())
}

#[test]
fn list_filters_by_category() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    lau(&temp)
        .args(["list", "--category", "security"])
        .assert()
        .success()
        .stdout(predicate::str::contains("redteam-expert"))
        .stdout(predicate::str::contains("pythonic-expert").not());
    Ok(())
}

#[test]
fn deploy_without_signals_uses_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    lau(&temp)
        .args(["deploy", "redteam-expert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Provider: default"))
        .stdout(predicate::str::contains("AGENTS.md created"));

    let deployed = fs::read_to_string(temp.path().join("project/AGENTS.md"))?;
    assert_eq!(deployed, "default redteam\n");
    Ok(())
}

#[test]
fn deploy_follows_detected_marker() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    write(&temp.path().join("project"), "CLAUDE.md", "existing\n");

    lau(&temp)
        .args(["deploy", "security/redteam-expert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("detected from CLAUDE.md"))
        .stderr(predicate::str::contains("Overwrote 1 existing file(s): CLAUDE.md"));

    let project = temp.path().join("project");
    assert_eq!(fs::read_to_string(project.join("CLAUDE.md"))?, "claude redteam\n");
    assert!(project.join(".claude/agents/redteam.md").exists());
    assert!(!project.join("AGENTS.md").exists());
    Ok(())
}

#[test]
fn deploy_dry_run_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    lau(&temp)
        .args(["deploy", "pythonic-expert", "--provider", "openai", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AGENTS.md would create"))
        .stdout(predicate::str::contains("nothing changed"));

    assert!(!temp.path().join("project/AGENTS.md").exists());
    Ok(())
}

#[test]
fn deploy_unavailable_provider_exits_4() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    lau(&temp)
        .args(["deploy", "pythonic-expert", "--provider", "cursor"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("default, openai, windsurf"));
    Ok(())
}

#[test]
fn deploy_ambiguous_name_exits_3() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    lau(&temp)
        .args(["deploy", "expert"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("data/expert"))
        .stderr(predicate::str::contains("ops/expert"));
    Ok(())
}

#[test]
fn deploy_unknown_template_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    lau(&temp)
        .args(["deploy", "redteam"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("did you mean: security/redteam-expert"));
    Ok(())
}

#[test]
fn deploy_invalid_template_exits_5() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    lau(&temp)
        .args(["deploy", "half-done"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("half-done"));
    Ok(())
}

#[test]
fn deploy_abort_on_conflict_exits_8() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    write(&temp.path().join("project"), "AGENTS.md", "mine\n");

    lau(&temp)
        .args(["deploy", "pythonic-expert", "--on-conflict", "abort"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("AGENTS.md"));

    let kept = fs::read_to_string(temp.path().join("project/AGENTS.md"))?;
    assert_eq!(kept, "mine\n");
    Ok(())
}

#[test]
fn deploy_rejects_bad_conflict_policy() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    lau(&temp)
        .args(["deploy", "pythonic-expert", "--on-conflict", "merge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("merge"));
    Ok(())
}

#[test]
fn missing_corpus_exits_10() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    let mut cmd = Command::new(cargo_bin("lau"));
    cmd.env("HOME", temp.path().join("home"))
        .env_remove("LAU_CORPUS")
        .args(["list", "--corpus"])
        .arg(temp.path().join("no-such-corpus"));
    cmd.assert()
        .code(10)
        .stderr(predicate::str::contains("no-such-corpus"));
    Ok(())
}

#[test]
fn corpus_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    let mut cmd = Command::new(cargo_bin("lau"));
    cmd.env("HOME", temp.path().join("home"))
        .env("LAU_CORPUS", temp.path().join("corpus"))
        .arg("list");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pythonic-expert"));
    Ok(())
}

#[test]
fn broken_config_exits_9() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    write(
        &temp.path().join("project"),
        ".lau/config.yml",
        "on_conflict: sometimes\n",
    );
    lau(&temp)
        .arg("list")
        .assert()
        .code(9)
        .stderr(predicate::str::contains("config.yml"));
    Ok(())
}

#[test]
fn show_lists_providers() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    lau(&temp)
        .args(["show", "security/redteam-expert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Offensive security reviewer."))
        .stdout(predicate::str::contains("claude (2 file(s))"))
        .stdout(predicate::str::contains("default (1 file(s))"));
    Ok(())
}

#[test]
fn detect_reports_markers() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    fs::create_dir_all(temp.path().join("project/.windsurf"))?;
    lau(&temp)
        .arg("detect")
        .assert()
        .success()
        .stdout(predicate::str::contains("windsurf (.windsurf)"));
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("lau"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("lau"));
    Ok(())
}

#[test]
fn deploy_twice_keeps_the_same_provider() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    for _ in 0..2 {
        lau(&temp)
            .args(["deploy", "pythonic-expert"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Provider: default"));
    }

    let deployed = fs::read_to_string(temp.path().join("project/AGENTS.md"))?;
    assert_eq!(deployed, "default python\n");
    Ok(())
}

#[test]
fn list_json_prints_under_silent_default_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup();
    write(
        &temp.path().join("project"),
        ".lau/config.yml",
        "default_output: silent\n",
    );

    let output = lau(&temp).args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed.as_array().map(Vec::len), Some(4));
    Ok(())
}
