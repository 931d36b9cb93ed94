use std::path::PathBuf;
use std::process::Command;

struct Workdir {
    path: PathBuf,
}

impl Workdir {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("stockroom_cli_{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&path).expect("failed to create workdir");
        Self { path }
    }
}

impl Drop for Workdir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn run_demo(dir: &Workdir, extra_env: &[(&str, &str)]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stockroom"));
    cmd.current_dir(&dir.path)
        .env_remove("RUST_LOG")
        .env_remove("STOCKROOM_DATA_FILE")
        .env_remove("STOCKROOM_LOG_FILE")
        .env_remove("STOCKROOM_LOW_THRESHOLD")
        .env_remove("STOCKROOM_DEPLETION");
    for (key, value) in extra_env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run stockroom")
}

#[test]
fn demo_prints_report_and_writes_files() {
    let dir = Workdir::new();
    let output = run_demo(&dir, &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Apple stock: 7\nLow items: []\nItems Report\napple -> 7\n"
    );

    let saved = std::fs::read_to_string(dir.path.join("inventory.json")).unwrap();
    assert_eq!(saved, "{\n  \"apple\": 7\n}");

    let log = std::fs::read_to_string(dir.path.join("inventory.log")).unwrap();
    assert!(log.contains(" [INFO]: Added 10 of apple"));
    assert!(log.contains(" [INFO]: Added -2 of banana"));
    assert!(log.contains(" [WARNING]: Invalid input types: item=123, qty=ten"));
    assert!(log.contains(" [ERROR]: Tried to remove non-existing item: orange"));
}

#[test]
fn log_file_is_appended_across_runs() {
    let dir = Workdir::new();
    assert!(run_demo(&dir, &[]).status.success());
    assert!(run_demo(&dir, &[]).status.success());

    let log = std::fs::read_to_string(dir.path.join("inventory.log")).unwrap();
    assert_eq!(log.matches("Added 10 of apple").count(), 2);
}

#[test]
fn unwritable_data_file_exits_non_zero() {
    let dir = Workdir::new();
    let output = run_demo(&dir, &[("STOCKROOM_DATA_FILE", "missing/dir/inventory.json")]);
    assert!(!output.status.success());
}

#[test]
fn retain_policy_keeps_negative_stock() {
    let dir = Workdir::new();
    let output = run_demo(&dir, &[("STOCKROOM_DEPLETION", "retain")]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Low items: ['banana']"));
    assert!(stdout.ends_with("banana -> -2\n"));
}
