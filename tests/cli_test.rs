use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_product-report"))
        .args(args)
        .env_remove("file_path")
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path is utf-8")
}

#[test]
fn test_prints_two_lines_on_success() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("db.csv");
    std::fs::write(
        &path,
        "name,price,rating\nWidget,9.99,4.5\nGadget,19.99,4.8\nGizmo,19.99,4.2\n",
    )?;

    let output = run_cli(&[path_arg(&path)])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Most expensive product: Gadget ($19.99)\nHighest rated product: Gadget (rating 4.80)\n"
    );
    assert!(output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_reads_path_from_environment() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("db.json");
    std::fs::write(&path, r#"[{"product": "Solo", "price": 3, "rating": 1}]"#)?;

    let output = Command::new(env!("CARGO_BIN_EXE_product-report"))
        .env("file_path", &path)
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Most expensive product: Solo ($3.00)\nHighest rated product: Solo (rating 1.00)\n"
    );
    Ok(())
}

#[test]
fn test_errors_exit_non_zero_with_one_line() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let empty = temp_dir.path().join("empty.csv");
    std::fs::write(&empty, "name,price,rating\n")?;
    let unsupported = temp_dir.path().join("db.yaml");
    std::fs::write(&unsupported, "- a")?;

    let cases = [
        (vec![], 1),
        (vec![path_arg(&empty)], 3),
        (vec![path_arg(&unsupported)], 1),
        (vec![path_arg(&empty), "--format", "xml"], 2),
    ];

    for (args, code) in cases {
        let output = run_cli(&args)?;
        assert_eq!(output.status.code(), Some(code), "{args:?}");
        assert!(output.stdout.is_empty(), "{args:?}");

        let stderr = String::from_utf8(output.stderr)?;
        assert_eq!(stderr.lines().count(), 1, "{args:?}: {stderr}");
    }
    Ok(())
}

#[test]
fn test_config_file_supplies_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data = temp_dir.path().join("products.dat");
    std::fs::write(&data, r#"[{"product": "Cfg", "price": 1, "rating": 2}]"#)?;

    let config = temp_dir.path().join("report.toml");
    std::fs::write(
        &config,
        format!(
            "[input]\npath = '{}'\nformat = \"json\"\n",
            path_arg(&data)
        ),
    )?;

    let output = run_cli(&["--config", path_arg(&config)])?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.starts_with("Most expensive product: Cfg ($1.00)"));
    Ok(())
}
