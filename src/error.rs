// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Playback paths never fail: out-of-range commands are clamped or dropped
//! and the platform reports outcomes through events. Errors only come from the
//! surrounding layers (configuration files, command line, window start-up).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Reading or writing a file failed.
    Io(String),
    /// `settings.toml` could not be parsed or serialized.
    Config(String),
    /// Invalid command-line input.
    Args(String),
    /// The window could not be opened or the event loop failed.
    Window(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, detail) = match self {
            Error::Io(detail) => ("I/O error", detail),
            Error::Config(detail) => ("invalid settings", detail),
            Error::Args(detail) => ("invalid arguments", detail),
            Error::Window(detail) => ("window error", detail),
        };
        write!(f, "{kind}: {detail}")
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

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Args(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Window(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_layer() {
        assert_eq!(
            Error::Io("disk full".into()).to_string(),
            "I/O error: disk full"
        );
        assert_eq!(
            Error::Args("--duration".into()).to_string(),
            "invalid arguments: --duration"
        );
        assert_eq!(
            Error::Window("no adapter".into()).to_string(),
            "window error: no adapter"
        );
    }

    #[test]
    fn missing_file_becomes_io_error() {
        let err: Error = std::fs::read_to_string("/definitely/not/here/settings.toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_settings_become_config_error() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("volume = = 1");
        let err: Error = parse.unwrap_err().into();
        assert!(err.to_string().starts_with("invalid settings: "));
    }

    #[test]
    fn pico_args_error_keeps_the_flag_name() {
        let err: Error = pico_args::Error::OptionWithoutAValue("--source").into();
        match err {
            Error::Args(message) => assert!(message.contains("--source")),
            other => panic!("expected Args, got {other:?}"),
        }
    }
}
