//! Error types for Component Gallery
//!
//! Components never fail at runtime; these errors only come from startup
//! work such as reading and writing the configuration file.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config file reads and writes)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
