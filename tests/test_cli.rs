use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_nextline");

#[test]
fn test_prints_file_lines() {
    let output = Command::new(BIN)
        .arg("tests/fixtures/unterminated.txt")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        b"no trailing separator\n\nlast line without one"
    );
}

#[test]
fn test_missing_file_reported_once() {
    let output = Command::new(BIN)
        .arg("tests/fixtures/missing.txt")
        .env("RUST_LOG", "error")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().filter(|line| !line.trim().is_empty()).count(), 1);
}
