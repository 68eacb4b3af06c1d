//! Layout configuration and applying it to a volume folder.

mod common;

use kodegen_bundler_dsstore::bundler::{
    Error,
    platform::macos::{
        alias::HostFileSystem,
        dmg::{BACKGROUND_DIR, DS_STORE_FILE, apply_dmg_customizations, build_ds_store,
            stage_background_image},
        dsstore::{BackgroundType, ENTRY_COUNT_OFFSET, Entry, EntryType, Record, SKELETON_LEN},
    },
    settings::{DmgBackground, DmgLayout, ItemPosition, WindowBounds},
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn item(name: &str, x: u32, y: u32) -> ItemPosition {
    ItemPosition {
        name: name.to_string(),
        x,
        y,
    }
}

#[test]
fn test_default_layout() {
    let layout = DmgLayout::default();
    assert_eq!(
        layout.window,
        WindowBounds {
            x: 0,
            y: 0,
            width: 640,
            height: 480
        }
    );
    assert_eq!(layout.icon_size, 128.0);
    assert_eq!(layout.label_size, 12.0);
    assert!(layout.label_on_bottom);
    assert_eq!(layout.background, DmgBackground::Default);
    assert!(layout.items.is_empty());
    assert!(layout.validate().is_ok());
}

#[test]
fn test_toml_layout_file() {
    let layout = DmgLayout::from_file(&fixture("layout.toml")).unwrap();

    assert_eq!(
        layout.window,
        WindowBounds {
            x: 100,
            y: 50,
            width: 660,
            height: 400
        }
    );
    assert_eq!(layout.icon_size, 100.0);
    assert_eq!(layout.label_size, 14.0);
    assert!(!layout.label_on_bottom);
    assert_eq!(layout.background, DmgBackground::Color([0.2, 0.4, 0.6]));
    assert_eq!(
        layout.items,
        vec![item("MyApp.app", 160, 200), item("Applications", 500, 200)]
    );
}

#[test]
fn test_json_layout_file() {
    let layout = DmgLayout::from_file(&fixture("layout.json")).unwrap();

    assert_eq!(layout.window.width, 540);
    assert_eq!(layout.window.height, 380);
    assert_eq!(layout.window.x, 0);
    assert_eq!(layout.icon_size, 96.0);
    assert_eq!(layout.label_size, 12.0);
    assert_eq!(layout.background, DmgBackground::Default);
    assert_eq!(layout.items.len(), 2);
}

#[test]
fn test_image_background_from_toml() {
    let layout =
        DmgLayout::from_toml_str(r#"background = { image = ".background/bg.png" }"#).unwrap();
    assert_eq!(
        layout.background,
        DmgBackground::Image(PathBuf::from(".background/bg.png"))
    );
}

#[test]
fn test_malformed_layouts() {
    assert!(matches!(
        DmgLayout::from_toml_str("icon_size = \"large\""),
        Err(Error::Toml(_))
    ));
    assert!(matches!(
        DmgLayout::from_json_str("{\"items\": 3}"),
        Err(Error::Json(_))
    ));
    assert!(matches!(
        DmgLayout::from_file(Path::new("/nonexistent/layout.toml")),
        Err(Error::Fs { .. })
    ));
}

#[test]
fn test_centered_layout() {
    let layout = DmgLayout::centered("MyApp.app", 640, 480, 100.0, 12.0);

    assert_eq!(layout.window.width, 640);
    assert_eq!(layout.window.height, 480);
    assert_eq!(layout.icon_size, 100.0);
    assert_eq!(
        layout.items,
        vec![item("MyApp.app", 163, 202), item("Applications", 476, 202)]
    );
    assert!(layout.validate().is_ok());
}

#[test]
fn test_centered_layout_clamps_to_window() {
    let layout = DmgLayout::centered("Tiny.app", 60, 40, 128.0, 12.0);
    assert_eq!(layout.items[0].x, 0);
    assert_eq!(layout.items[0].y, 0);
}

#[test]
fn test_validate_rejects_bad_layouts() {
    let mut layout = DmgLayout::default();
    layout.window.width = 0;
    assert!(matches!(layout.validate(), Err(Error::InvalidLayout(_))));

    let mut layout = DmgLayout::default();
    layout.icon_size = -1.0;
    assert!(matches!(layout.validate(), Err(Error::InvalidLayout(_))));

    let mut layout = DmgLayout::default();
    layout.label_size = f64::NAN;
    assert!(matches!(layout.validate(), Err(Error::InvalidLayout(_))));

    let mut layout = DmgLayout::default();
    layout.background = DmgBackground::Color([0.0, 1.5, 0.0]);
    assert!(matches!(layout.validate(), Err(Error::InvalidLayout(_))));

    let mut layout = DmgLayout::default();
    layout.items = vec![item("", 1, 1)];
    assert!(matches!(layout.validate(), Err(Error::InvalidLayout(_))));

    let mut layout = DmgLayout::default();
    layout.items = vec![item("Applications", 1, 1), item("Applications", 2, 2)];
    assert!(matches!(layout.validate(), Err(Error::InvalidLayout(_))));
}

#[test]
fn test_build_ds_store_from_layout() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("MyApp.app")).unwrap();

    let layout = DmgLayout::centered("MyApp.app", 640, 480, 100.0, 12.0);
    let store = build_ds_store(dir.path(), &layout, &HostFileSystem).unwrap();

    // bwsp, icvp and one Iloc per item
    assert_eq!(store.len(), 4);
    match store.get(".", EntryType::IconViewPreferences).map(Entry::record) {
        Some(Record::IconViewPreferences(icvp)) => {
            assert_eq!(icvp.icon_size, 100.0);
            assert_eq!(icvp.background_type, BackgroundType::Default);
            assert!(icvp.label_on_bottom);
        }
        other => panic!("unexpected record: {other:?}"),
    }
    match store.get("Applications", EntryType::IconLocation).map(Entry::record) {
        Some(Record::IconLocation(loc)) => assert_eq!((loc.x, loc.y), (476, 202)),
        other => panic!("unexpected record: {other:?}"),
    }
}

#[test]
fn test_missing_background_image() {
    let dir = TempDir::new().unwrap();
    let layout = DmgLayout {
        background: DmgBackground::Image(PathBuf::from(".background/missing.png")),
        ..DmgLayout::default()
    };

    assert!(matches!(
        build_ds_store(dir.path(), &layout, &HostFileSystem),
        Err(Error::InvalidLayout(_))
    ));
    assert!(!dir.path().join(DS_STORE_FILE).exists());
}

#[cfg(unix)]
#[test]
fn test_background_image_layout() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source.png");
    std::fs::write(&source, b"\x89PNG").unwrap();

    let volume = dir.path().join("volume");
    std::fs::create_dir(&volume).unwrap();
    let relative = stage_background_image(&volume, &source).unwrap();
    assert_eq!(relative, Path::new(BACKGROUND_DIR).join("source.png"));
    assert!(volume.join(&relative).is_file());

    let layout = DmgLayout {
        background: DmgBackground::Image(relative),
        ..DmgLayout::default()
    };
    let store = build_ds_store(&volume, &layout, &HostFileSystem).unwrap();
    match store.get(".", EntryType::IconViewPreferences).map(Entry::record) {
        Some(Record::IconViewPreferences(icvp)) => {
            assert_eq!(icvp.background_type, BackgroundType::Picture);
            assert!(icvp.background_image_alias.is_some());
        }
        other => panic!("unexpected record: {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_layout_resolved_through_injected_filesystem() {
    let fs = common::installer_fs();
    let volume = Path::new("/Volumes/Installer");
    let layout = DmgLayout {
        background: DmgBackground::Image(PathBuf::from(".background/background.png")),
        items: vec![item("MyApp.app", 160, 240), item("Applications", 480, 240)],
        ..DmgLayout::default()
    };

    // Nothing here exists on the host; the fake filesystem answers every lookup
    let store = build_ds_store(volume, &layout, &fs).unwrap();
    assert_eq!(store.len(), 4);
    match store.get(".", EntryType::IconViewPreferences).map(Entry::record) {
        Some(Record::IconViewPreferences(icvp)) => {
            assert_eq!(icvp.background_type, BackgroundType::Picture);
            assert!(icvp.background_image_alias.is_some());
        }
        other => panic!("unexpected record: {other:?}"),
    }

    let missing = DmgLayout {
        background: DmgBackground::Image(PathBuf::from(".background/missing.png")),
        ..DmgLayout::default()
    };
    assert!(matches!(
        build_ds_store(volume, &missing, &fs),
        Err(Error::InvalidLayout(_))
    ));

    let directory = DmgLayout {
        background: DmgBackground::Image(PathBuf::from(".background")),
        ..DmgLayout::default()
    };
    assert!(matches!(
        build_ds_store(volume, &directory, &fs),
        Err(Error::InvalidLayout(_))
    ));
}

#[test]
fn test_stage_missing_background_image() {
    let dir = TempDir::new().unwrap();
    assert!(stage_background_image(dir.path(), &dir.path().join("nope.png")).is_err());
}

#[test]
fn test_apply_dmg_customizations() {
    let dir = TempDir::new().unwrap();
    let layout = DmgLayout::from_file(&fixture("layout.toml")).unwrap();

    let written = apply_dmg_customizations(dir.path(), &layout, &HostFileSystem).unwrap();
    assert_eq!(written, dir.path().join(DS_STORE_FILE));

    let bytes = std::fs::read(&written).unwrap();
    assert_eq!(bytes.len(), SKELETON_LEN);
    assert_eq!(
        u32::from_be_bytes([
            bytes[ENTRY_COUNT_OFFSET],
            bytes[ENTRY_COUNT_OFFSET + 1],
            bytes[ENTRY_COUNT_OFFSET + 2],
            bytes[ENTRY_COUNT_OFFSET + 3],
        ]),
        4
    );
}
