// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors raised by the application shell (configuration, arguments, exports).
///
/// Per-file extraction problems are not errors: they are reported as
/// [`FailureReason`](crate::domain::extraction::FailureReason) values.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Export(String),
    Cli(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Export(_) => "error-export",
            Error::Cli(_) => "error-cli",
        }
    }

    /// Message carried by the error, without the category prefix.
    pub fn detail(&self) -> &str {
        match self {
            Error::Io(e) | Error::Config(e) | Error::Export(e) | Error::Cli(e) => e,
        }
    }

    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Cli(_) => 2,
            Error::Io(_) | Error::Config(_) | Error::Export(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Export(e) => write!(f, "Export Error: {}", e),
            Error::Cli(e) => write!(f, "Argument Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Cli(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_error = toml::from_str::<toml::Table>("a = = b").expect_err("invalid toml");
        let err: Error = toml_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn from_pico_args_error_produces_cli_variant() {
        let err: Error = pico_args::Error::MissingArgument.into();
        assert!(matches!(err, Error::Cli(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Error::Io("x".into()).exit_code(), 1);
        assert_eq!(Error::Export("x".into()).exit_code(), 1);
    }

    #[test]
    fn detail_strips_prefix() {
        let err = Error::Export("disk full".into());
        assert_eq!(err.detail(), "disk full");
        assert_eq!(err.to_string(), "Export Error: disk full");
    }

    #[test]
    fn i18n_keys() {
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-io");
        assert_eq!(Error::Cli(String::new()).i18n_key(), "error-cli");
    }
}
