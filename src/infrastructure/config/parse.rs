//! Conversion of raw environment values into typed fields

use std::ffi::OsString;
use std::str::FromStr;

use super::loader::ConfigError;

/// Fetch a required variable, treating an empty value as absent.
///
/// A value that is set but not valid UTF-8 is a conversion error, not a
/// missing one.
pub fn require<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<OsString>,
{
    let raw = match lookup(var) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ConfigError::MissingVar { var }),
    };
    raw.into_string().map_err(|raw| ConfigError::InvalidVar {
        var,
        value: raw.to_string_lossy().into_owned(),
        expected: "UTF-8 string",
    })
}

/// Fetch a required variable and parse it as an integer type.
pub fn require_int<T, F>(lookup: &F, var: &'static str) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<OsString>,
{
    let value = require(lookup, var)?;
    value.parse::<T>().map_err(|_| ConfigError::InvalidVar {
        var,
        value,
        expected: "integer",
    })
}

/// Fetch a required variable and parse it as a boolean.
pub fn require_bool<F>(lookup: &F, var: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<OsString>,
{
    let value = require(lookup, var)?;
    parse_bool(&value).ok_or(ConfigError::InvalidVar {
        var,
        value,
        expected: "boolean",
    })
}

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
