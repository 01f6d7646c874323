// SPDX-License-Identifier: MPL-2.0
use cad_folio::config::GalleryConfig;
use cad_folio::error::{ConfigurationError, ResourceLoadError};
use cad_folio::gallery::{self, loader, Effect, ImageSlot, Trigger};
use std::path::Path;
use tempfile::tempdir;

fn write_png(path: &Path, width: u32, height: u32) {
    image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([40, 80, 120, 255]))
        .save(path)
        .expect("Failed to write png fixture");
}

fn trigger(images: &str, dir: &Path) -> Trigger {
    Trigger {
        images: Some(images.to_string()),
        heading: Some("Bracket Assembly".to_string()),
        base_dir: dir.to_path_buf(),
    }
}

/// Loads the current image the way the runtime would and feeds the result back.
async fn complete_current(state: &mut gallery::State) {
    let ticket = state.gallery().ticket();
    let source = state
        .gallery()
        .current_image()
        .cloned()
        .expect("gallery has a current image");
    let result = loader::load_image(source.clone()).await;
    let _ = state.handle_message(gallery::Message::ImageLoaded {
        ticket,
        source,
        result,
    });
}

#[tokio::test]
async fn session_loads_navigates_and_closes() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_png(&dir.path().join("a.png"), 8, 6);
    write_png(&dir.path().join("b.png"), 4, 4);

    let mut state = gallery::State::new(&GalleryConfig::default());
    let (effect, _) =
        state.handle_message(gallery::Message::Open(trigger(r#"["a.png","b.png"]"#, dir.path())));
    assert_eq!(effect, Effect::Opened);
    assert!(matches!(state.slot(), ImageSlot::Loading));

    complete_current(&mut state).await;
    match state.slot() {
        ImageSlot::Ready(image) => assert_eq!((image.width, image.height), (8, 6)),
        other => panic!("expected ready image, got {other:?}"),
    }

    let _ = state.handle_message(gallery::Message::NavigateNext);
    assert_eq!(state.gallery().current_index(), 1);
    complete_current(&mut state).await;
    assert!(matches!(state.slot(), ImageSlot::Ready(_)));

    // Back to the first image: served from the cache without a new load.
    let _ = state.handle_message(gallery::Message::NavigatePrevious);
    assert!(matches!(state.slot(), ImageSlot::Ready(_)));
    assert_eq!(state.cache().len(), 2);

    let (effect, _) = state.handle_message(gallery::Message::Close);
    assert_eq!(effect, Effect::Closed);
    assert!(!state.is_open());
    assert!(state.info().is_none());
}

#[tokio::test]
async fn missing_file_fails_inline_and_session_continues() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_png(&dir.path().join("b.png"), 4, 4);

    let mut state = gallery::State::new(&GalleryConfig::default());
    let _ = state.handle_message(gallery::Message::Open(trigger(
        r#"["missing.png","b.png"]"#,
        dir.path(),
    )));

    complete_current(&mut state).await;
    assert!(matches!(
        state.slot(),
        ImageSlot::Failed(ResourceLoadError::Io(_))
    ));
    assert!(state.is_open());

    let _ = state.handle_message(gallery::Message::NavigateNext);
    complete_current(&mut state).await;
    assert!(matches!(state.slot(), ImageSlot::Ready(_)));
}

#[tokio::test]
async fn superseded_load_does_not_replace_visible_image() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_png(&dir.path().join("a.png"), 8, 6);
    write_png(&dir.path().join("b.png"), 4, 4);

    let mut state = gallery::State::new(&GalleryConfig::default());
    let _ = state.handle_message(gallery::Message::Open(trigger(
        r#"["a.png","b.png"]"#,
        dir.path(),
    )));
    let stale_ticket = state.gallery().ticket();
    let stale_source = state.gallery().current_image().cloned().expect("current");

    let _ = state.handle_message(gallery::Message::NavigateNext);
    complete_current(&mut state).await;

    let late = loader::load_image(stale_source.clone()).await;
    let _ = state.handle_message(gallery::Message::ImageLoaded {
        ticket: stale_ticket,
        source: stale_source,
        result: late,
    });

    match state.slot() {
        ImageSlot::Ready(image) => assert_eq!((image.width, image.height), (4, 4)),
        other => panic!("expected the second image, got {other:?}"),
    }
    assert_eq!(state.gallery().current_index(), 1);
}

#[test]
fn malformed_trigger_keeps_gallery_closed() {
    let mut state = gallery::State::new(&GalleryConfig::default());

    let (effect, _) = state.handle_message(gallery::Message::Open(Trigger {
        images: Some("not json".into()),
        ..Trigger::default()
    }));

    assert!(matches!(
        effect,
        Effect::ConfigurationFailed(ConfigurationError::MalformedImageList(_))
    ));
    assert!(!state.is_open());
}
