use std::fs;
use std::process::Command;

fn deepwalk() -> Command {
    Command::new(env!("CARGO_BIN_EXE_deepwalk"))
}

#[test]
fn prints_files_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("keep.txt"), "k").unwrap();
    fs::create_dir(root.join("S")).unwrap();
    fs::write(root.join("S").join("b.txt"), "b").unwrap();

    let out = deepwalk().arg(root).args(["--only", "files"]).output().unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.ends_with(".txt")));

    assert!(!root.join("a.txt").exists());
    assert!(root.join("keep.txt").exists());
}

#[test]
fn empty_directory_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();

    let out = deepwalk().arg(dir.path()).output().unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("no files"));
}

#[test]
fn skip_keeps_directory_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::create_dir(root.join("vendor")).unwrap();
    fs::write(root.join("vendor").join("lib.rs"), "").unwrap();

    let out = deepwalk()
        .arg(root)
        .args(["--skip", "vendor", "--only", "dirs"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.trim_end().ends_with("vendor"));
    assert!(root.join("vendor").join("lib.rs").exists());
}
