// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
}

/// A gallery trigger carried missing or malformed image-list data.
///
/// The gallery never opens when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The trigger has no image-list attribute at all.
    MissingImageList,

    /// The attribute is present but is not a JSON list of strings.
    MalformedImageList(String),

    /// The attribute parsed to an empty list.
    EmptyImageList,
}

impl ConfigurationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ConfigurationError::MissingImageList => "error-gallery-missing-images",
            ConfigurationError::MalformedImageList(_) => "error-gallery-malformed-images",
            ConfigurationError::EmptyImageList => "error-gallery-empty-images",
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::MissingImageList => write!(f, "No image list attached"),
            ConfigurationError::MalformedImageList(msg) => {
                write!(f, "Malformed image list: {}", msg)
            }
            ConfigurationError::EmptyImageList => write!(f, "Image list is empty"),
        }
    }
}

/// A single gallery image could not be shown.
///
/// Scoped to one image: the session and the other images are unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLoadError {
    /// Local file could not be read (missing, permission denied, ...).
    Io(String),

    /// Remote reference could not be fetched.
    Network(String),

    /// Bytes were read but are not a decodable image.
    Decode(String),

    /// The load did not complete within the configured timeout.
    TimedOut,
}

impl ResourceLoadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ResourceLoadError::Io(_) => "error-image-io",
            ResourceLoadError::Network(_) => "error-image-network",
            ResourceLoadError::Decode(_) => "error-image-decode",
            ResourceLoadError::TimedOut => "error-image-timeout",
        }
    }
}

impl fmt::Display for ResourceLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            ResourceLoadError::Network(msg) => write!(f, "Network error: {}", msg),
            ResourceLoadError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ResourceLoadError::TimedOut => write!(f, "Image load timed out"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
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
    fn configuration_error_i18n_keys() {
        assert_eq!(
            ConfigurationError::MissingImageList.i18n_key(),
            "error-gallery-missing-images"
        );
        assert_eq!(
            ConfigurationError::MalformedImageList("x".into()).i18n_key(),
            "error-gallery-malformed-images"
        );
        assert_eq!(
            ConfigurationError::EmptyImageList.i18n_key(),
            "error-gallery-empty-images"
        );
    }

    #[test]
    fn resource_load_error_display() {
        let err = ResourceLoadError::Network("404 Not Found".to_string());
        assert!(format!("{}", err).contains("404"));
        assert_eq!(ResourceLoadError::TimedOut.i18n_key(), "error-image-timeout");
    }
}
