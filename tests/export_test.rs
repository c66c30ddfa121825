//! Integration tests for cropping and saving the selection

use image::{GenericImageView, ImageBuffer, Rgb};

use imcrop::app::{update, AppMessage, AppModel, UpdateResult};
use imcrop::config::AppConfig;
use imcrop::domain::document::operations::CropRegion;

fn write_source(dir: &std::path::Path) -> std::path::PathBuf {
    // Encode the coordinates in the pixels so the crop origin can be checked.
    let img = ImageBuffer::from_fn(1600, 1200, |x, y| Rgb([(x / 8) as u8, (y / 8) as u8, 0]));
    let path = dir.join("photo.jpg.png");
    img.save(&path).unwrap();
    path
}

fn session(path: &std::path::Path) -> AppModel {
    let config = AppConfig {
        fix_ratio: false,
        ..AppConfig::default()
    };
    let mut model = AppModel::new(config);
    model.open(path);
    assert!(!model.load_failed, "{:?}", model.error);
    model
}

#[test]
fn selection_maps_to_source_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let mut model = session(&source);

    let doc = model.document.as_ref().unwrap();
    assert_eq!(doc.display_size(), (800, 600));
    assert_eq!(doc.scale_factor(), 0.5);

    let select = AppMessage::Select {
        x: 100.0,
        y: 100.0,
        width: 400.0,
        height: 300.0,
    };
    assert_eq!(update(&mut model, select), UpdateResult::Redraw);
    assert_eq!(
        model.crop_region().unwrap(),
        CropRegion::new(200, 200, 1000, 800)
    );
}

#[test]
fn save_writes_png_with_free_name() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let mut model = session(&source);

    update(
        &mut model,
        AppMessage::Select {
            x: 100.0,
            y: 100.0,
            width: 400.0,
            height: 300.0,
        },
    );

    let UpdateResult::Saved(first) = update(&mut model, AppMessage::Save) else {
        panic!("save failed: {:?}", model.error);
    };
    assert_eq!(first, dir.path().join("photo.jpg.resized.png"));
    assert_eq!(model.info.as_deref(), Some("Image saved as photo.jpg.resized.png"));

    let saved = image::open(&first).unwrap();
    assert_eq!(saved.dimensions(), (800, 600));
    assert_eq!(saved.to_rgb8().get_pixel(0, 0), &Rgb([25, 25, 0]));

    let UpdateResult::Saved(second) = update(&mut model, AppMessage::Save) else {
        panic!("second save failed: {:?}", model.error);
    };
    assert_eq!(second, dir.path().join("photo.jpg.resized-1.png"));
}

#[test]
fn undecodable_file_marks_load_failed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not an image").unwrap();

    let mut model = AppModel::new(AppConfig::default());
    model.open(&path);
    assert!(model.load_failed);
    assert!(model.controller.is_none());
    assert_eq!(
        update(&mut model, AppMessage::PointerMoved { x: 10.0, y: 10.0 }),
        UpdateResult::None
    );
}
