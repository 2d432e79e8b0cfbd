//! 路径猜测测试

use factorio_quicklaunch::core::paths::PathGuesser;
use std::fs;
use tempfile::TempDir;

#[cfg(unix)]
#[test]
fn test_first_executable_candidate_wins() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    let not_executable = home.path().join("plain");
    let first = home.path().join("first");
    let second = home.path().join("second");
    for path in [&not_executable, &first, &second] {
        fs::write(path, b"").unwrap();
    }
    for path in [&first, &second] {
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    let guesser = PathGuesser::new(
        vec![
            home.path().join("missing"),
            not_executable,
            first.clone(),
            second,
        ],
        vec![],
        home.path().join("fallback"),
    );

    let guesses = guesser.guess();
    assert_eq!(guesses.executable_path, first.to_string_lossy());
}

#[test]
fn test_first_existing_saves_directory_or_fallback() {
    let home = TempDir::new().unwrap();
    let guesser = PathGuesser::for_home(home.path());

    // 都不存在时使用回退路径
    let guesses = guesser.guess();
    assert_eq!(
        guesses.saves_directory,
        home.path().join(".factorio/saves").to_string_lossy()
    );

    let steam_saves = home.path().join(".local/share/Factorio/saves");
    fs::create_dir_all(&steam_saves).unwrap();
    assert_eq!(
        guesser.guess().saves_directory,
        steam_saves.to_string_lossy()
    );

    let primary = home.path().join(".factorio/saves");
    fs::create_dir_all(&primary).unwrap();
    assert_eq!(guesser.guess().saves_directory, primary.to_string_lossy());
}

#[test]
fn test_no_executable_found() {
    let home = TempDir::new().unwrap();
    let guesser = PathGuesser::new(
        vec![home.path().join("a"), home.path().to_path_buf()],
        vec![],
        home.path().join("fallback"),
    );
    assert_eq!(guesser.guess().executable_path, "");
}

#[cfg(unix)]
#[test]
fn test_any_execute_bit_counts() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    let owner_only = home.path().join("owner_only");
    let others_only = home.path().join("others_only");
    fs::write(&owner_only, b"").unwrap();
    fs::write(&others_only, b"").unwrap();
    fs::set_permissions(&owner_only, fs::Permissions::from_mode(0o700)).unwrap();
    fs::set_permissions(&others_only, fs::Permissions::from_mode(0o601)).unwrap();

    let guesser = PathGuesser::new(
        vec![others_only.clone()],
        vec![],
        home.path().join("fallback"),
    );
    assert_eq!(guesser.guess().executable_path, others_only.to_string_lossy());

    let guesser =
        PathGuesser::new(vec![owner_only.clone()], vec![], home.path().join("fallback"));
    assert_eq!(guesser.guess().executable_path, owner_only.to_string_lossy());
}
