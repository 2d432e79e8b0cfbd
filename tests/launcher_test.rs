//! 游戏启动测试
//!
//! 使用记录型进程创建器，不会真正启动游戏

use factorio_quicklaunch::core::launcher::{
    LaunchCommand, Launcher, ProcessSpawner,
};
use factorio_quicklaunch::{LauncherError, ServerEntry};
use std::cell::RefCell;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingSpawner {
    calls: RefCell<Vec<LaunchCommand>>,
    fail_with: Option<io::ErrorKind>,
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&self, command: &LaunchCommand) -> io::Result<()> {
        if let Some(kind) = self.fail_with {
            return Err(io::Error::new(kind, "spawn refused"));
        }
        self.calls.borrow_mut().push(command.clone());
        Ok(())
    }
}

fn fake_executable(dir: &Path) -> PathBuf {
    let path = dir.join("factorio");
    fs::write(&path, b"#!/bin/sh\n").unwrap();
    path
}

fn server() -> ServerEntry {
    ServerEntry {
        name: "friends".to_string(),
        host: "example.org".to_string(),
        port: 34197,
        user: "me".to_string(),
    }
}

fn args(items: &[&str]) -> Vec<OsString> {
    items.iter().map(OsString::from).collect()
}

#[test]
fn test_launch_normal_missing_executable() {
    let temp_dir = TempDir::new().unwrap();
    let launcher = Launcher::with_spawner(RecordingSpawner::default());

    let err = launcher
        .launch_normal(temp_dir.path().join("missing"))
        .unwrap_err();
    assert!(matches!(err, LauncherError::PathNotFound { .. }));
    assert!(launcher.spawner().calls.borrow().is_empty());

    // 目录不算可执行文件
    let err = launcher.launch_normal(temp_dir.path()).unwrap_err();
    assert!(matches!(err, LauncherError::PathNotFound { .. }));
    assert!(launcher.spawner().calls.borrow().is_empty());
}

#[test]
fn test_launch_normal_has_no_arguments() {
    let temp_dir = TempDir::new().unwrap();
    let executable = fake_executable(temp_dir.path());
    let launcher = Launcher::with_spawner(RecordingSpawner::default());

    launcher.launch_normal(&executable).unwrap();

    let calls = launcher.spawner().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, executable);
    assert!(calls[0].args.is_empty());
}

#[test]
fn test_continue_latest_passes_save_path() {
    let temp_dir = TempDir::new().unwrap();
    let executable = fake_executable(temp_dir.path());
    let saves = temp_dir.path().join("saves");
    fs::create_dir(&saves).unwrap();
    for (name, secs) in [("old.zip", 100), ("new.zip", 200)] {
        fs::write(saves.join(name), b"save").unwrap();
        File::options()
            .write(true)
            .open(saves.join(name))
            .unwrap()
            .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }
    let launcher = Launcher::with_spawner(RecordingSpawner::default());

    let command = launcher.continue_latest(&executable, &saves).unwrap();

    assert_eq!(command.args[0], OsString::from("--load-game"));
    let save_path = PathBuf::from(&command.args[1]);
    assert!(save_path.is_absolute());
    assert_eq!(save_path.file_name().unwrap(), "new.zip");
    assert_eq!(launcher.spawner().calls.borrow().len(), 1);
}

#[test]
fn test_continue_latest_without_saves() {
    let temp_dir = TempDir::new().unwrap();
    let executable = fake_executable(temp_dir.path());
    let launcher = Launcher::with_spawner(RecordingSpawner::default());

    let err = launcher
        .continue_latest(&executable, temp_dir.path().join("saves"))
        .unwrap_err();
    assert!(matches!(err, LauncherError::NoSaveFound { .. }));
    assert!(launcher.spawner().calls.borrow().is_empty());
}

#[test]
fn test_continue_latest_missing_executable() {
    let temp_dir = TempDir::new().unwrap();
    let saves = temp_dir.path().join("saves");
    fs::create_dir(&saves).unwrap();
    fs::write(saves.join("world.zip"), b"save").unwrap();
    let launcher = Launcher::with_spawner(RecordingSpawner::default());

    let err = launcher
        .continue_latest(temp_dir.path().join("missing"), &saves)
        .unwrap_err();
    assert!(matches!(err, LauncherError::PathNotFound { .. }));
    assert!(launcher.spawner().calls.borrow().is_empty());
}

#[test]
fn test_continue_latest_checks_saves_before_executable() {
    let temp_dir = TempDir::new().unwrap();
    let launcher = Launcher::with_spawner(RecordingSpawner::default());

    // 存档和可执行文件都缺失时报告缺少存档
    let err = launcher
        .continue_latest(
            temp_dir.path().join("missing"),
            temp_dir.path().join("saves"),
        )
        .unwrap_err();
    assert!(matches!(err, LauncherError::NoSaveFound { .. }));
    assert!(launcher.spawner().calls.borrow().is_empty());
}

#[test]
fn test_connect_without_secret() {
    let temp_dir = TempDir::new().unwrap();
    let executable = fake_executable(temp_dir.path());
    let launcher = Launcher::with_spawner(RecordingSpawner::default());

    let command = launcher.connect(&executable, &server(), None).unwrap();
    assert_eq!(command.args, args(&["--mp-connect", "example.org:34197"]));

    // 空密码等同于没有密码
    let command = launcher.connect(&executable, &server(), Some("")).unwrap();
    assert_eq!(command.args, args(&["--mp-connect", "example.org:34197"]));
}

#[test]
fn test_connect_with_secret() {
    let temp_dir = TempDir::new().unwrap();
    let executable = fake_executable(temp_dir.path());
    let launcher = Launcher::with_spawner(RecordingSpawner::default());

    let command = launcher
        .connect(&executable, &server(), Some("hunter2"))
        .unwrap();
    assert_eq!(
        command.args,
        args(&[
            "--mp-connect",
            "example.org:34197",
            "--password",
            "hunter2"
        ])
    );
    assert_eq!(launcher.spawner().calls.borrow()[0], command);
}

#[test]
fn test_connect_missing_executable() {
    let temp_dir = TempDir::new().unwrap();
    let launcher = Launcher::with_spawner(RecordingSpawner::default());

    let err = launcher
        .connect(temp_dir.path().join("nope"), &server(), Some("x"))
        .unwrap_err();
    assert!(matches!(err, LauncherError::PathNotFound { .. }));
    assert!(launcher.spawner().calls.borrow().is_empty());
}

#[test]
fn test_spawn_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let executable = fake_executable(temp_dir.path());
    let launcher = Launcher::with_spawner(RecordingSpawner {
        fail_with: Some(io::ErrorKind::PermissionDenied),
        ..RecordingSpawner::default()
    });

    match launcher.connect(&executable, &server(), None) {
        Err(LauncherError::LaunchFailed { message }) => {
            assert!(message.contains("spawn refused"))
        }
        other => panic!("Expected LaunchFailed, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_detached_spawn_of_non_executable_file() {
    let temp_dir = TempDir::new().unwrap();
    // 没有执行权限
    let executable = fake_executable(temp_dir.path());
    let err = Launcher::detached().launch_normal(&executable).unwrap_err();
    assert!(matches!(err, LauncherError::LaunchFailed { .. }));
}
