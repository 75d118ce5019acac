use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_grammar-demo"))
        .args(args)
        .output()
        .expect("failed to run grammar-demo")
}

// ---------------------------------------------------------------------------
// Help output
// ---------------------------------------------------------------------------

#[test]
fn test_no_args_prints_summary_help() {
    let out = run(&[]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Usage: grammar-demo -command [options] ..."));
    assert!(stdout.contains("-convert, -c"));
    assert!(stdout.contains("Examples"));
}

#[test]
fn test_help_command_prints_detail_for_named_command() {
    let out = run(&["-h", "convert"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("precision="));
    assert!(stdout.contains("Write GeoJSON output"));
    assert!(!stdout.contains("Usage:"));
}

// ---------------------------------------------------------------------------
// Parsing to JSON
// ---------------------------------------------------------------------------

#[test]
fn test_parse_reports_commands_as_json() {
    let out = run(&["in.shp", "-simplify", "interval=100", "-convert", "-geojson"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed[0]["name"], "files");
    assert_eq!(parsed[0]["positionals"][0], "in.shp");
    assert_eq!(parsed[1]["name"], "simplify");
    assert_eq!(parsed[1]["options"]["interval"], 100.0);
    assert_eq!(parsed[2]["name"], "convert");
    assert_eq!(parsed[2]["options"]["format"], "geojson");
}

// ---------------------------------------------------------------------------
// Failure policy
// ---------------------------------------------------------------------------

#[test]
fn test_unknown_command_exits_non_zero() {
    let out = run(&["-badcmd"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unknown command: -badcmd"));
}

#[test]
fn test_validator_failure_exits_non_zero() {
    let out = run(&["-filter"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("[filter] missing expression"));
}
