//! Process-level contract: any failure exits with status 1.

use std::process::Command;

#[test]
fn missing_config_file_exits_one() {
    let status = Command::new(env!("CARGO_BIN_EXE_solmint"))
        .args(["--config", "/nonexistent/solmint.toml", "balance"])
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn invalid_config_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solmint.toml");
    std::fs::write(&path, "[rpc]\ncluster = \"nonsense\"\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_solmint"))
        .args(["--config"])
        .arg(&path)
        .arg("balance")
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}
