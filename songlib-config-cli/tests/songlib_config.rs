use anyhow::{anyhow, Result};
use rstest::rstest;
use std::process::{Command, Output};

fn run_songlib_config(args: &[&str]) -> Result<Output> {
    let exe = env!("CARGO_BIN_EXE_songlib-config");
    let output = Command::new(exe).args(args).output()?;
    Ok(output)
}

fn stdout(output: &Output) -> Result<String> {
    String::from_utf8(output.stdout.clone()).map_err(|e| anyhow!("stdout was not UTF-8: {e}"))
}

#[test]
fn prints_global_script_by_default() -> Result<()> {
    let output = run_songlib_config(&[])?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout(&output)?;
    assert!(stdout.starts_with("// API Configuration\nwindow.appConfig = Object.freeze({\n"));
    assert!(stdout.contains(r#""API_BASE_URL": "http://127.0.0.1:5000""#));
    assert!(stdout.contains(r#""FOLDER_EXISTS": "/api/folder-exists""#));
    Ok(())
}

#[test]
fn prints_json() -> Result<()> {
    let output = run_songlib_config(&["--format", "json"])?;
    assert_eq!(output.status.code(), Some(0));
    let config: serde_json::Value = serde_json::from_str(&stdout(&output)?)?;
    assert_eq!(config["API_BASE_URL"], "http://127.0.0.1:5000");
    assert_eq!(config["ENDPOINTS"]["UPLOAD"], "/api/upload");
    assert_eq!(config["ENDPOINTS"]["LIST_FOLDERS"], "/api/folders");
    assert_eq!(config["ENDPOINTS"]["FOLDER_CONTENTS"], "/api/folders");
    assert_eq!(
        config["ENDPOINTS"]
            .as_object()
            .map(serde_json::Map::len),
        Some(4)
    );
    Ok(())
}

#[rstest]
#[case::upload("UPLOAD", "http://127.0.0.1:5000/api/upload\n")]
#[case::list_folders("LIST_FOLDERS", "http://127.0.0.1:5000/api/folders\n")]
#[case::folder_exists("FOLDER_EXISTS", "http://127.0.0.1:5000/api/folder-exists\n")]
#[case::folder_contents("FOLDER_CONTENTS", "http://127.0.0.1:5000/api/folders\n")]
fn prints_endpoint_url(#[case] name: &str, #[case] expect: &str) -> Result<()> {
    let output = run_songlib_config(&["--endpoint", name])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output)?, expect);
    Ok(())
}

#[rstest]
#[case::binding_with_json(&["--binding", "cfg", "--format", "json"])]
#[case::endpoint_with_list(&["--endpoint", "UPLOAD", "--list"])]
#[case::binding_with_list(&["--binding", "cfg", "--list"])]
#[case::binding_with_endpoint(&["--binding", "cfg", "--endpoint", "UPLOAD"])]
#[case::json_with_list(&["--format", "json", "--list"])]
#[case::json_with_endpoint(&["-f", "json", "--endpoint", "UPLOAD"])]
fn invalid_arg_combinations(#[case] args: &[&str]) -> Result<()> {
    let output = run_songlib_config(args)?;
    assert_eq!(output.status.code(), Some(127));
    assert!(stdout(&output)?.contains("Usage:"), "help is printed");
    Ok(())
}

#[test]
fn invalid_binding_name() -> Result<()> {
    let output = run_songlib_config(&["--binding", "app-config"])?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("`app-config` is not a valid JavaScript identifier"),
        "{stderr}"
    );
    Ok(())
}
