mod common;

use common::synthetic_image::disc_u8;
use gradient_fill::image::io::{load_grayscale_image, save_grayscale_u8};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gradient_fill_cli_{name}_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

fn run_with_config(dir: &Path, config: &str) -> std::process::Output {
    let cfg = dir.join("config.json");
    fs::write(&cfg, config).expect("write config");
    Command::new(env!("CARGO_BIN_EXE_gradient_fill"))
        .arg(&cfg)
        .output()
        .expect("run gradient_fill")
}

#[test]
fn binary_fills_png_and_writes_report() {
    let dir = scratch_dir("ok");
    let input = dir.join("disc.png");
    let output = dir.join("out").join("filled.png");
    let report = dir.join("out").join("report.json");
    save_grayscale_u8(&disc_u8(10, 10, (5, 5), 4, 255, 0), &input).expect("save input");

    let config = format!(
        r#"{{
            "input_path": {input:?},
            "output_path": {output:?},
            "report_json": {report:?},
            "params": {{ "notch": {{ "enabled": true, "half_angle_deg": 10.0, "depth_frac": 0.2 }} }}
        }}"#
    );
    let out = run_with_config(&dir, &config);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let filled = load_grayscale_image(&output).expect("load output");
    assert_eq!(filled.get(1, 5), 150);
    assert_eq!(filled.get(9, 5), 0);
    assert_eq!(filled.get(0, 0), 0);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("report")).expect("json");
    assert_eq!(json["domain"]["side"], 9);
    assert_eq!(json["notch"]["pixelsCarved"], 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn binary_reports_empty_region_and_writes_nothing() {
    let dir = scratch_dir("empty");
    let input = dir.join("black.png");
    let output = dir.join("filled.png");
    save_grayscale_u8(&disc_u8(8, 8, (4, 4), 2, 0, 0), &input).expect("save input");

    let config = format!(r#"{{ "input_path": {input:?}, "output_path": {output:?} }}"#);
    let out = run_with_config(&dir, &config);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("threshold >= 255"), "stderr: {stderr}");
    assert!(!output.exists());

    let _ = fs::remove_dir_all(&dir);
}
