use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn small_sieve(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_small-sieve"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> Result<String> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path_str(&path))
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// 不帶參數時輸出預設範例結果
#[test]
fn test_default_run_prints_filtered_fibonacci() -> Result<()> {
    let output = small_sieve(&[])?;
    assert_eq!(stdout(&output), "[1 1 2 3 5 8]\n");
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_filter_with_flags() -> Result<()> {
    let output = small_sieve(&["filter", "--numbers", "-3,4,50", "--less-than", "5"])?;
    assert_eq!(stdout(&output), "[-3 4]\n");
    assert_eq!(output.status.code(), Some(0));

    let output = small_sieve(&["filter", "--numbers", "20,30", "--less-than", "10"])?;
    assert_eq!(stdout(&output), "[]\n");
    Ok(())
}

#[test]
fn test_validate_single_person() -> Result<()> {
    let output = small_sieve(&["validate", "--name", "Alice", "--age", "30"])?;
    assert_eq!(stdout(&output), "valid\n");
    assert_eq!(output.status.code(), Some(0));

    let output = small_sieve(&["validate", "--name", "", "--age", "150"])?;
    assert_eq!(stdout(&output), "invalid: age, name\n");
    assert_eq!(output.status.code(), Some(1));

    let output = small_sieve(&["validate", "--name", "Alice", "--age", "120"])?;
    assert_eq!(stdout(&output), "invalid: age\n");
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_validate_file_text_output() -> Result<()> {
    let dir = TempDir::new()?;
    let csv = write_file(
        &dir,
        "people.csv",
        "name,age,phone_number\nAlice,30,555-0100\n,30,\nCarol,150,\n",
    )?;

    let output = small_sieve(&["validate-file", &csv])?;
    assert_eq!(
        stdout(&output),
        "Alice: valid\n: invalid: name\nCarol: invalid: age\n1 valid, 2 invalid\n"
    );
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_validate_file_all_valid_json() -> Result<()> {
    let dir = TempDir::new()?;
    let csv = write_file(&dir, "people.csv", "name,age,phone_number\nAlice,30,\nBaby,0,\n")?;

    let output = small_sieve(&["validate-file", &csv, "--format", "json"])?;
    assert_eq!(output.status.code(), Some(0));

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(summary["valid"], 2);
    assert_eq!(summary["invalid"], 0);
    assert_eq!(summary["outcomes"][1]["person"]["name"], "Baby");
    Ok(())
}

#[test]
fn test_missing_people_file_exits_with_io_code() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = path_str(&dir.path().join("nope.csv"));

    let output = small_sieve(&["validate-file", &missing])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_filter_ignores_validation_settings() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write_file(&dir, "sieve.toml", "[validation]\nmax_age = 0\n")?;

    let output = small_sieve(&["--config", &config, "filter"])?;
    assert_eq!(stdout(&output), "[1 1 2 3 5 8]\n");
    assert_eq!(output.status.code(), Some(0));

    let output = small_sieve(&["--config", &config, "validate", "--name", "Alice", "--age", "30"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_config_with_commented_placeholder() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write_file(
        &dir,
        "sieve.toml",
        "# less_than = ${SMALL_SIEVE_CLI_COMMENTED_UNSET}\n[filter]\nless_than = 3\n",
    )?;

    let output = small_sieve(&["--config", &config])?;
    assert_eq!(stdout(&output), "[1 1 2]\n");
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}
