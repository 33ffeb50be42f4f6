mod fixtures;

use fixtures::copy_fixture;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn generate_linux_tests() -> Command {
    Command::new(env!("CARGO_BIN_EXE_generate-linux-tests"))
}

#[test]
fn test_cli_help() {
    let output = generate_linux_tests()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("generate-linux-tests"));
    assert!(stdout.contains("--tests-dir"));
    assert!(stdout.contains("--verbose"));
}

#[test]
fn test_cli_default_tests_dir() {
    let package = copy_fixture("swift-package");

    let output = generate_linux_tests()
        .current_dir(package.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("** Generating Linux Tests files **"));
    assert!(stdout.contains("** All tests generated **"));
    assert!(package.path().join("Tests/LinuxMain.swift").exists());
}

#[test]
fn test_cli_verbose_logs_files() {
    let package = copy_fixture("swift-package");
    let tests_dir = package.path().join("Tests");

    let output = generate_linux_tests()
        .args(["-v", "--tests-dir", tests_dir.to_str().unwrap()])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Parsing file:"));
    assert!(stderr.contains("Creating file:"));
}

#[test]
fn test_cli_missing_tests_dir() {
    let temp_dir = TempDir::new().unwrap();

    let output = generate_linux_tests()
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not exist") || stderr.contains("Invalid arguments"));
}

#[test]
fn test_cli_orphan_function_fails() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("AppTests");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("BrokenTests.swift"), "func testOrphan() {}\n").unwrap();

    let output = generate_linux_tests()
        .args(["--tests-dir", temp_dir.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("testOrphan"));
}

#[test]
fn test_cli_unknown_flag() {
    let output = generate_linux_tests()
        .arg("--format")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[cfg(unix)]
#[test]
fn test_cli_interrupt_exits_with_status_one() {
    use std::io::{BufRead, BufReader};
    use std::process::Stdio;

    // Large enough that the run is still scanning when SIGINT arrives.
    let temp_dir = TempDir::new().unwrap();
    let body: String = (0..20)
        .map(|i| format!("    func testCase{i}() {{}}\n"))
        .collect();
    for target in 0..100 {
        let dir = temp_dir.path().join(format!("Target{target}Tests"));
        fs::create_dir_all(&dir).unwrap();
        for file in 0..200 {
            let name = format!("Case{target}x{file}Tests");
            fs::write(
                dir.join(format!("{name}.swift")),
                format!("class {name}: XCTestCase {{\n{body}}}\n"),
            )
            .unwrap();
        }
    }

    let mut child = generate_linux_tests()
        .args(["--tests-dir", temp_dir.path().to_str().unwrap()])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn command");

    // The banner is printed after the interrupt handler is installed.
    let mut banner = String::new();
    BufReader::new(child.stdout.take().unwrap())
        .read_line(&mut banner)
        .unwrap();
    assert!(banner.contains("** Generating Linux Tests files **"));

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("Failed to send SIGINT");
    assert!(killed.success());

    let status = child.wait().unwrap();
    assert_eq!(status.code(), Some(1));
    assert!(!temp_dir.path().join("LinuxMain.swift").exists());
}
