use assert_cmd::Command;

#[test]
fn help_describes_the_binary() {
    let output = Command::cargo_bin("folio")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("terminal portfolio"));
    assert!(stdout.contains("--page"));
    assert!(stdout.contains("--theme"));
    assert!(stdout.contains("--no-typing"));
}

#[test]
fn version_flag_succeeds() {
    Command::cargo_bin("folio")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

#[test]
fn refuses_to_start_without_a_tty() {
    let output = Command::cargo_bin("folio").unwrap().output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stdin must be a tty"));
}
