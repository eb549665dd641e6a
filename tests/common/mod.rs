#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");
        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ldsnip");
        cmd.env("HOME", &self.home).env_remove("LDSNIP_LOG");
        cmd
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work.join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn write_user_config(&self, contents: &str) {
        let dir = self.home.join(".config/ldsnip");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), contents).expect("write config");
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_stdin(&self, args: &[&str], stdin: &str) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .write_stdin(stdin)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn path_str(p: &Path) -> &str {
    p.to_str().expect("utf8 path")
}

pub fn warnings_with_code<'a>(report: &'a Value, code: &str) -> Vec<&'a Value> {
    report["diagnostics"]
        .as_array()
        .expect("diagnostics array")
        .iter()
        .filter(|d| d["code"] == code && d["severity"] == "warning")
        .collect()
}
