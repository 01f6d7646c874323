// SPDX-License-Identifier: MPL-2.0
//! Image fetching and decoding for gallery slides and thumbnails.
//!
//! Local references are read with `tokio::fs`, remote ones with `reqwest`.
//! Decoding runs on the blocking pool: raster formats go through `image`,
//! SVG documents are rasterized with `resvg`.

use super::trigger::ImageRef;
use crate::config::MAX_LOADING_TIMEOUT_SECS;
use crate::error::ResourceLoadError;
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::time::Duration;

/// Upper bound for a whole remote request; the gallery's own timeout is
/// usually shorter and marks the slot as failed first.
const REMOTE_TIMEOUT: Duration = Duration::from_secs(MAX_LOADING_TIMEOUT_SECS as u64);
const REMOTE_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Decoded size in bytes, as RGBA.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Fetches and decodes one image.
///
/// # Errors
///
/// Returns [`ResourceLoadError::Io`] or [`ResourceLoadError::Network`] when
/// the bytes cannot be obtained, and [`ResourceLoadError::Decode`] when they
/// are not an image.
pub async fn load_image(source: ImageRef) -> Result<ImageData, ResourceLoadError> {
    let bytes = fetch_bytes(&source).await?;
    let is_svg = source.is_svg();

    tokio::task::spawn_blocking(move || decode(&bytes, is_svg))
        .await
        .unwrap_or_else(|e| Err(ResourceLoadError::Decode(format!("decode task failed: {e}"))))
}

async fn fetch_bytes(source: &ImageRef) -> Result<Vec<u8>, ResourceLoadError> {
    match source {
        ImageRef::Local(path) => tokio::fs::read(path)
            .await
            .map_err(|e| ResourceLoadError::Io(format!("{}: {e}", path.display()))),
        ImageRef::Remote(url) => {
            let client = reqwest::Client::builder()
                .connect_timeout(REMOTE_CONNECT_TIMEOUT)
                .timeout(REMOTE_TIMEOUT)
                .build()
                .map_err(|e| ResourceLoadError::Network(e.to_string()))?;
            let response = client
                .get(url)
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(|e| ResourceLoadError::Network(e.to_string()))?;
            let body = response
                .bytes()
                .await
                .map_err(|e| ResourceLoadError::Network(e.to_string()))?;
            Ok(body.to_vec())
        }
    }
}

/// Decodes raw bytes into displayable pixels.
///
/// Documents that start like XML are treated as SVG even without the
/// extension.
///
/// # Errors
///
/// Returns [`ResourceLoadError::Decode`] if the bytes are not a supported image.
pub fn decode(bytes: &[u8], is_svg: bool) -> Result<ImageData, ResourceLoadError> {
    if is_svg || looks_like_svg(bytes) {
        rasterize_svg(bytes)
    } else {
        let img = image_rs::load_from_memory(bytes)
            .map_err(|e| ResourceLoadError::Decode(e.to_string()))?;
        let (width, height) = img.dimensions();
        Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(256)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

fn rasterize_svg(bytes: &[u8]) -> Result<ImageData, ResourceLoadError> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| ResourceLoadError::Decode(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(ResourceLoadError::Decode("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ResourceLoadError::Decode("failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; iced expects straight RGBA.
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let c = pixel.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
        <rect width="6" height="3" fill="blue" />
    </svg>"#;

    #[tokio::test]
    async fn loads_local_png() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("bracket.png");
        RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]))
            .save(&path)
            .expect("failed to write png");

        let data = load_image(ImageRef::Local(path))
            .await
            .expect("png should load");
        assert_eq!((data.width, data.height), (4, 2));
        assert_eq!(data.size_bytes(), 32);
    }

    #[tokio::test]
    async fn loads_local_svg() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("section.svg");
        fs::write(&path, SVG).expect("failed to write svg");

        let data = load_image(ImageRef::Local(path))
            .await
            .expect("svg should load");
        assert_eq!((data.width, data.height), (6, 3));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_image(ImageRef::Local(temp_dir.path().join("gone.png"))).await;
        assert!(matches!(result, Err(ResourceLoadError::Io(_))));
    }

    #[tokio::test]
    async fn garbage_bytes_are_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"not a png").expect("failed to write file");

        let result = load_image(ImageRef::Local(path)).await;
        assert!(matches!(result, Err(ResourceLoadError::Decode(_))));
    }

    #[test]
    fn svg_is_sniffed_without_extension() {
        let data = decode(SVG.as_bytes(), false).expect("svg should decode");
        assert_eq!(data.width, 6);
    }

    #[test]
    fn zero_sized_svg_is_rejected() {
        let svg = r"<svg xmlns='http://www.w3.org/2000/svg' width='0' height='10'></svg>";
        assert!(matches!(
            decode(svg.as_bytes(), true),
            Err(ResourceLoadError::Decode(_))
        ));
    }
}
