//! Optional dotenv file sourcing

use std::io;
use std::path::Path;

use super::loader::ConfigError;

/// Default dotenv file, resolved against the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Source `KEY=VALUE` pairs from `path` into the process environment.
///
/// Variables already set in the environment are left alone. Returns
/// `Ok(false)` when the file does not exist; any other read or parse failure
/// is an error naming the file.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "sourced env file");
            Ok(true)
        }
        Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no env file, using ambient environment");
            Ok(false)
        }
        Err(source) => Err(ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}
