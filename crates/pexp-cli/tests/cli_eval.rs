use std::path::PathBuf;
use std::process::{Command, Output};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pexp"))
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn tmp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pexp_cli_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn eval_contract() {
    let out = run(&["eval", "--q", "0.5", "--rate", "1"]);
    assert!(
        out.status.success(),
        "eval should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    let p = v.get("cumulative_probability").and_then(|x| x.as_f64()).unwrap();
    assert!((p - 0.3934693402873666).abs() < 1e-12);
    assert_eq!(v.get("quantile").and_then(|x| x.as_f64()), Some(0.5));

    let chart = v.get("chart").expect("chart included by default");
    let xs = chart.get("x_values").and_then(|x| x.as_array()).expect("x_values array");
    assert_eq!(xs.len(), 1000);
}

#[test]
fn eval_no_chart() {
    let out = run(&["eval", "--q", "2", "--rate", "0.5", "--no-chart"]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(v.get("chart").is_none());
    let p = v.get("cumulative_probability").and_then(|x| x.as_f64()).unwrap();
    assert!((p - 0.6321205588285577).abs() < 1e-12);
}

#[test]
fn eval_validation_failures() {
    let missing = run(&["eval", "--rate", "1"]);
    assert!(!missing.status.success());
    assert!(String::from_utf8_lossy(&missing.stderr).contains("q is required and must be numeric"));

    let zero_rate = run(&["eval", "--q", "1", "--rate", "0"]);
    assert!(!zero_rate.status.success());
    assert!(String::from_utf8_lossy(&zero_rate.stderr).contains("rate must be a positive number"));

    let negative_rate = run(&["eval", "--q", "1", "--rate", "-2"]);
    assert!(!negative_rate.status.success());

    let non_numeric = run(&["eval", "--q", "1", "--rate", "a"]);
    assert!(!non_numeric.status.success());
}

#[test]
fn eval_request_file() {
    let dir = tmp_dir("request");
    let req = dir.join("request.json");
    std::fs::write(&req, r#"{"q": 1, "rate": "a"}"#).unwrap();
    let bad = run(&["eval", "--request", req.to_string_lossy().as_ref()]);
    assert!(!bad.status.success());
    assert!(String::from_utf8_lossy(&bad.stderr).contains("rate must be a positive number"));

    std::fs::write(&req, r#"{"q": 1, "want_chart": false}"#).unwrap();
    let out_path = dir.join("result.json");
    let ok = run(&[
        "eval",
        "--request",
        req.to_string_lossy().as_ref(),
        "--output",
        out_path.to_string_lossy().as_ref(),
    ]);
    assert!(ok.status.success(), "stderr={}", String::from_utf8_lossy(&ok.stderr));
    let v: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&out_path).unwrap()).unwrap();
    assert!(v.get("chart").is_none());
    assert_eq!(v.get("rate").and_then(|x| x.as_f64()), Some(1.0));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn render_writes_svg() {
    let dir = tmp_dir("render");
    let out_path = dir.join("chart.svg");
    let out = run(&[
        "render",
        "--q",
        "1",
        "--rate",
        "1",
        "--output",
        out_path.to_string_lossy().as_ref(),
    ]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    let svg = std::fs::read_to_string(&out_path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Cumulative Distribution Function for q = 1, rate = 1"));
    std::fs::remove_dir_all(&dir).ok();
}
