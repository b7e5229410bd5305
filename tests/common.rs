#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wc() -> Command {
    cargo_bin_cmd!("workclock")
}

/// Create a unique settings file path inside the system temp dir and remove
/// any existing file
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workclock.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Write a reference settings record used by most tests:
/// 22000 over 22 days, 09:00-18:00 with a 12:00-13:00 break.
pub fn write_example_settings(cfg_path: &str) {
    wc().args(["--config", cfg_path, "init"]).assert().success();

    wc().args([
        "--config",
        cfg_path,
        "set",
        "--salary",
        "22000",
        "--days",
        "22",
        "--start",
        "09:00",
        "--end",
        "18:00",
        "--break-start",
        "12:00",
        "--break-end",
        "13:00",
    ])
    .assert()
    .success();
}
