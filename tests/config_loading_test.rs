// Integration tests for loading configuration from the process environment.
// Every test goes through temp_env so variables are restored afterwards and
// tests touching the environment never overlap.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use toncenter_config::infrastructure::config::REQUIRED_VARS;
use toncenter_config::{ConfigError, ConfigLoader, Network};

const SCENARIO: [(&str, &str); 6] = [
    ("POSTGRES_URI", "postgres://x"),
    ("PORT", "8080"),
    ("ADMIN_USERNAME", "a"),
    ("ADMIN_PASSWORD", "b"),
    ("DEPTH", "3"),
    ("IS_TESTNET", "false"),
];

/// Scenario variables with some entries replaced (`None` unsets the variable)
fn env_with(
    overrides: &[(&'static str, Option<&'static str>)],
) -> Vec<(&'static str, Option<&'static str>)> {
    SCENARIO
        .iter()
        .map(|&(key, value)| {
            let value = overrides
                .iter()
                .find(|(k, _)| *k == key)
                .map_or(Some(value), |(_, v)| *v);
            (key, value)
        })
        .collect()
}

fn all_unset() -> Vec<(&'static str, Option<&'static str>)> {
    REQUIRED_VARS.iter().map(|&key| (key, None)).collect()
}

fn write_env_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(".env");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    path
}

fn loader_without_file(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::with_env_file(dir.path().join(".env"))
}

#[test]
fn test_mainnet_scenario_without_env_file() {
    let dir = TempDir::new().unwrap();

    temp_env::with_vars(env_with(&[]), || {
        let config = loader_without_file(&dir).load().expect("scenario should load");

        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.toncenter_url, "https://toncenter.com/api/v2/");
        assert_eq!(config.data_dir, PathBuf::from("/api/apidata"));
        assert_eq!(config.database_uri, "postgres://x");
        assert_eq!(config.port, 8080);
        assert_eq!(config.depth, 3);
    });
}

#[test]
fn test_testnet_scenario() {
    let dir = TempDir::new().unwrap();

    temp_env::with_vars(env_with(&[("IS_TESTNET", Some("true"))]), || {
        let config = loader_without_file(&dir).load().expect("testnet should load");

        assert!(config.is_testnet());
        assert_eq!(config.toncenter_url, "https://testnet.toncenter.com/api/v2/");
        assert_eq!(config.data_dir, PathBuf::from("/api/apidata"));
    });
}

#[test]
fn test_port_missing_aborts() {
    let dir = TempDir::new().unwrap();

    temp_env::with_vars(env_with(&[("PORT", None)]), || {
        let err = loader_without_file(&dir).load().unwrap_err();

        assert!(matches!(err, ConfigError::MissingVar { var: "PORT" }));
        assert!(err.to_string().contains("PORT"));
    });
}

#[test]
fn test_port_not_an_integer_aborts() {
    let dir = TempDir::new().unwrap();

    temp_env::with_vars(env_with(&[("PORT", Some("abc"))]), || {
        let err = loader_without_file(&dir).load().unwrap_err();

        match err {
            ConfigError::InvalidVar { var, ref value, .. } => {
                assert_eq!(var, "PORT");
                assert_eq!(value, "abc");
            }
            other => panic!("Expected InvalidVar, got {other:?}"),
        }
    });
}

#[test]
fn test_empty_value_counts_as_missing() {
    let dir = TempDir::new().unwrap();

    temp_env::with_vars(env_with(&[("ADMIN_PASSWORD", Some(""))]), || {
        let err = loader_without_file(&dir).load().unwrap_err();
        assert_eq!(err.var(), Some("ADMIN_PASSWORD"));
    });
}

#[test]
fn test_env_file_supplies_variables() {
    let dir = TempDir::new().unwrap();
    let path = write_env_file(
        dir.path(),
        "POSTGRES_URI=postgres://nft:pw@db/nft\n\
         PORT=9000\n\
         ADMIN_USERNAME=root\n\
         ADMIN_PASSWORD=pw\n\
         # comment lines are skipped\n\
         DEPTH=5\n\
         IS_TESTNET=true\n",
    );

    temp_env::with_vars(all_unset(), || {
        let config = ConfigLoader::with_env_file(&path).load().expect("env file should load");

        assert_eq!(config.port, 9000);
        assert_eq!(config.depth, 5);
        assert_eq!(config.admin_username, "root");
        assert_eq!(config.network, Network::Testnet);
    });
}

#[test]
fn test_ambient_environment_wins_over_env_file() {
    let dir = TempDir::new().unwrap();
    let path = write_env_file(dir.path(), "PORT=9000\nDEPTH=7\nIS_TESTNET=true\n");

    temp_env::with_vars(env_with(&[("DEPTH", None)]), || {
        let config = ConfigLoader::with_env_file(&path).load().expect("merged env should load");

        // PORT and IS_TESTNET were already set, DEPTH only came from the file.
        assert_eq!(config.port, 8080);
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.depth, 7);
    });
}

#[test]
fn test_malformed_env_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_env_file(dir.path(), "PORT=8080\nTHIS LINE HAS NO ASSIGNMENT\n");

    temp_env::with_vars(env_with(&[]), || {
        let err = ConfigLoader::with_env_file(&path).load().unwrap_err();

        assert!(matches!(err, ConfigError::EnvFile { .. }));
        assert!(err.to_string().contains(".env"));
    });
}

#[test]
fn test_env_file_read_error_is_fatal() {
    let dir = TempDir::new().unwrap();

    // A directory exists but cannot be read as a file.
    temp_env::with_vars(env_with(&[]), || {
        let err = ConfigLoader::with_env_file(dir.path()).load().unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
    });
}

#[cfg(unix)]
#[test]
fn test_non_utf8_value_is_a_conversion_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let vars: Vec<(&str, Option<&OsStr>)> = SCENARIO
        .iter()
        .map(|&(key, value)| {
            let value = if key == "ADMIN_USERNAME" {
                OsStr::from_bytes(b"adm\xffin")
            } else {
                OsStr::new(value)
            };
            (key, Some(value))
        })
        .collect();

    temp_env::with_vars(vars, || {
        let err = loader_without_file(&dir).load().unwrap_err();

        match err {
            ConfigError::InvalidVar { var, ref value, expected } => {
                assert_eq!(var, "ADMIN_USERNAME");
                assert_eq!(value, "adm\u{fffd}in");
                assert_eq!(expected, "UTF-8 string");
            }
            other => panic!("Expected InvalidVar, got {other:?}"),
        }
    });
}
