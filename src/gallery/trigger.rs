// SPDX-License-Identifier: MPL-2.0
//! Gallery trigger contract: a serialized image list plus a card heading.

use crate::error::ConfigurationError;
use std::path::{Path, PathBuf};

/// What a gallery-enabled element hands to [`GalleryState::open`].
///
/// [`GalleryState::open`]: super::GalleryState::open
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trigger {
    /// Raw attribute value, expected to be a JSON list of strings.
    pub images: Option<String>,
    /// Heading of the card the trigger belongs to.
    pub heading: Option<String>,
    /// Directory relative paths are resolved against.
    pub base_dir: PathBuf,
}

/// A single image reference taken from a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageRef {
    Local(PathBuf),
    Remote(String),
}

impl ImageRef {
    /// Classifies a raw reference. `http(s)` URLs stay remote, everything
    /// else is a path, resolved against `base_dir` when relative.
    #[must_use]
    pub fn parse(raw: &str, base_dir: &Path) -> Self {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return ImageRef::Remote(raw.to_string());
        }

        let path = Path::new(raw.strip_prefix("file://").unwrap_or(raw));
        if path.is_absolute() {
            ImageRef::Local(path.to_path_buf())
        } else {
            ImageRef::Local(base_dir.join(path))
        }
    }

    /// Short name for logs and notifications.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            ImageRef::Local(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            ImageRef::Remote(url) => url
                .rsplit('/')
                .find(|segment| !segment.is_empty())
                .unwrap_or(url)
                .to_string(),
        }
    }

    /// Returns `true` if the reference names an SVG document.
    #[must_use]
    pub fn is_svg(&self) -> bool {
        let name = match self {
            ImageRef::Local(path) => path.to_string_lossy().into_owned(),
            ImageRef::Remote(url) => url.split(['?', '#']).next().unwrap_or(url).to_string(),
        };
        name.to_ascii_lowercase().ends_with(".svg")
    }
}

impl Trigger {
    /// Parses the serialized image list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the attribute is absent, is not a
    /// JSON list of non-blank strings, or is empty.
    pub fn parse_images(&self) -> Result<Vec<ImageRef>, ConfigurationError> {
        let raw = self
            .images
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .ok_or(ConfigurationError::MissingImageList)?;

        let entries: Vec<String> = serde_json::from_str(raw)
            .map_err(|err| ConfigurationError::MalformedImageList(err.to_string()))?;

        if entries.is_empty() {
            return Err(ConfigurationError::EmptyImageList);
        }

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                if entry.trim().is_empty() {
                    Err(ConfigurationError::MalformedImageList(format!(
                        "entry {} is blank",
                        index + 1
                    )))
                } else {
                    Ok(ImageRef::parse(entry, &self.base_dir))
                }
            })
            .collect()
    }

    /// Heading text, or `fallback` when the card has none.
    #[must_use]
    pub fn title(&self, fallback: &str) -> String {
        self.heading
            .as_deref()
            .map(str::trim)
            .filter(|heading| !heading.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger(images: Option<&str>) -> Trigger {
        Trigger {
            images: images.map(str::to_string),
            heading: None,
            base_dir: PathBuf::from("/portfolio"),
        }
    }

    #[test]
    fn parses_list_of_strings() {
        let images = trigger(Some(r#"["a.png", "https://cdn.example.com/b.png"]"#))
            .parse_images()
            .expect("list should parse");

        assert_eq!(
            images,
            vec![
                ImageRef::Local(PathBuf::from("/portfolio/a.png")),
                ImageRef::Remote("https://cdn.example.com/b.png".into()),
            ]
        );
    }

    #[test]
    fn missing_attribute_is_configuration_error() {
        assert_eq!(
            trigger(None).parse_images(),
            Err(ConfigurationError::MissingImageList)
        );
        assert_eq!(
            trigger(Some("   ")).parse_images(),
            Err(ConfigurationError::MissingImageList)
        );
    }

    #[test]
    fn non_list_payloads_are_malformed() {
        for payload in [r#"{"a": 1}"#, "[1, 2]", "not json", r#"["ok", ""]"#] {
            assert!(
                matches!(
                    trigger(Some(payload)).parse_images(),
                    Err(ConfigurationError::MalformedImageList(_))
                ),
                "payload {payload} should be rejected"
            );
        }
    }

    #[test]
    fn empty_list_is_configuration_error() {
        assert_eq!(
            trigger(Some("[]")).parse_images(),
            Err(ConfigurationError::EmptyImageList)
        );
    }

    #[test]
    fn title_falls_back_when_heading_missing_or_blank() {
        let mut t = trigger(Some("[]"));
        assert_eq!(t.title("CAD Views"), "CAD Views");
        t.heading = Some("  ".into());
        assert_eq!(t.title("CAD Views"), "CAD Views");
        t.heading = Some(" Bracket Assembly ".into());
        assert_eq!(t.title("CAD Views"), "Bracket Assembly");
    }

    #[test]
    fn absolute_paths_are_kept() {
        let image = ImageRef::parse("/srv/cad/iso.png", Path::new("/portfolio"));
        assert_eq!(image, ImageRef::Local(PathBuf::from("/srv/cad/iso.png")));
    }

    #[test]
    fn display_name_and_svg_detection() {
        let remote = ImageRef::Remote("https://example.com/views/top.SVG?v=2".into());
        assert!(remote.is_svg());
        assert_eq!(remote.display_name(), "top.SVG?v=2");

        let local = ImageRef::parse("cad/iso.png", Path::new("/p"));
        assert!(!local.is_svg());
        assert_eq!(local.display_name(), "iso.png");
    }
}
