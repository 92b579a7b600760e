use std::path::PathBuf;

use clap::Parser;
use minihttp::config::{Cli, Config};

// Environment variables are process-wide, so everything that touches them
// lives in this one test.
#[test]
fn test_config_environment() {
    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("DIRECTORY");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "127.0.0.1:4221");
    assert_eq!(cfg.directory, None);

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
        std::env::set_var("DIRECTORY", "/srv/files");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.directory, Some(PathBuf::from("/srv/files")));

    let cli = Cli::parse_from(["minihttp", "--listen", "127.0.0.1:9000"]);
    let cfg = Config::from_cli(cli).unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.directory, Some(PathBuf::from("/srv/files")));

    // A file key wins over the environment even when it holds the default value
    let path = std::env::temp_dir().join(format!("minihttp-config-env-{}.yaml", std::process::id()));
    std::fs::write(&path, "listen_addr: \"127.0.0.1:4221\"\n").unwrap();
    let cli = Cli::parse_from(["minihttp", "--config", path.to_str().unwrap()]);
    let cfg = Config::from_cli(cli).unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:4221");
    assert_eq!(cfg.directory, Some(PathBuf::from("/srv/files")));
    let _ = std::fs::remove_file(&path);

    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("DIRECTORY");
    }
}

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.listen_addr, "127.0.0.1:4221");
    assert_eq!(cfg.directory, None);
    assert_eq!(cfg.read_buffer_size, 1024);
    assert_eq!(cfg.max_request_bytes(), 8192);
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml_str(
        "listen_addr: \"0.0.0.0:8080\"\ndirectory: /var/data\nread_buffer_size: 4096\n",
    )
    .unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
    assert_eq!(cfg.directory, Some(PathBuf::from("/var/data")));
    assert_eq!(cfg.read_buffer_size, 4096);
}

#[test]
fn test_config_from_yaml_partial_uses_defaults() {
    let cfg = Config::from_yaml_str("directory: /tmp\n").unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:4221");
    assert_eq!(cfg.read_buffer_size, 1024);
}

#[test]
fn test_config_max_request_bytes_saturates() {
    let cfg = Config::from_yaml_str(&format!("read_buffer_size: {}\n", usize::MAX)).unwrap();

    assert_eq!(cfg.read_buffer_size, usize::MAX);
    assert_eq!(cfg.max_request_bytes(), usize::MAX);
}

#[test]
fn test_config_from_yaml_invalid() {
    assert!(Config::from_yaml_str("read_buffer_size: lots\n").is_err());
}

#[test]
fn test_config_from_missing_file() {
    let path = std::env::temp_dir().join("minihttp-config-does-not-exist.yaml");
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_config_cli_overrides_file() {
    let path = std::env::temp_dir().join(format!("minihttp-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "directory: /from/file\nread_buffer_size: 2048\n").unwrap();

    let cli = Cli::parse_from([
        "minihttp",
        "--config",
        path.to_str().unwrap(),
        "--directory",
        "/from/cli",
    ]);
    let cfg = Config::from_cli(cli).unwrap();

    assert_eq!(cfg.directory, Some(PathBuf::from("/from/cli")));
    assert_eq!(cfg.read_buffer_size, 2048);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_cli_directory_flag() {
    let cli = Cli::parse_from(["minihttp", "--directory", "/tmp/served"]);
    assert_eq!(cli.directory, Some(PathBuf::from("/tmp/served")));
    assert!(cli.listen.is_none());
    assert!(cli.config.is_none());
}
