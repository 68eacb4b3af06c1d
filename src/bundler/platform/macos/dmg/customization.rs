//! DMG appearance customization by writing `.DS_Store` directly.
//!
//! Handles all DMG customization features including:
//! - Copying the background image into the volume's `.background` folder
//! - Translating a [`DmgLayout`] into a `.DS_Store` document
//! - Writing the document at the volume root

use crate::bundler::{
    error::{Error, Result},
    platform::macos::{
        alias::{FileKind, FileSystem},
        dsstore::DsStore,
    },
    settings::{DmgBackground, DmgLayout},
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Hidden folder Finder conventionally keeps background pictures in.
pub const BACKGROUND_DIR: &str = ".background";

/// Name of the metadata file at the volume root.
pub const DS_STORE_FILE: &str = ".DS_Store";

/// Apply DMG customizations to a staged or mounted volume root.
///
/// # Process
/// 1. Validate the layout
/// 2. Build the `.DS_Store` document, creating the background alias if configured
/// 3. Write `<volume_root>/.DS_Store`
///
/// Returns the path of the written file.
///
/// # Background
/// The alias record points at the background picture by volume name and
/// path, so it only resolves once the picture sits on the final volume.
/// Write the layout again after mounting if it was first written into a
/// staging folder.
pub fn apply_dmg_customizations(
    volume_root: &Path,
    layout: &DmgLayout,
    fs: &dyn FileSystem,
) -> Result<PathBuf> {
    log::info!("Applying DMG customizations to {}", volume_root.display());

    let store = build_ds_store(volume_root, layout, fs)?;
    let ds_store_path = volume_root.join(DS_STORE_FILE);
    store.write(&ds_store_path)?;

    log::info!("✓ DMG customizations applied");
    Ok(ds_store_path)
}

/// Translates `layout` into a `.DS_Store` document for `volume_root`.
///
/// The background image and positioned items are looked up through `fs`.
pub fn build_ds_store(volume_root: &Path, layout: &DmgLayout, fs: &dyn FileSystem) -> Result<DsStore> {
    layout.validate()?;

    let mut store = DsStore::new();
    let window = layout.window;
    store.set_window(window.width, window.height, window.x, window.y);
    store.set_icon_size(layout.icon_size);
    store.set_label_size(layout.label_size);
    store.set_label_placement(layout.label_on_bottom);

    match &layout.background {
        DmgBackground::Default => store.set_background_default(),
        DmgBackground::Color([r, g, b]) => store.set_background_color(*r, *g, *b),
        DmgBackground::Image(relative) => {
            let image = volume_root.join(relative);
            let is_file = fs
                .stat(&image)
                .is_ok_and(|stat| stat.kind == FileKind::File);
            if !is_file {
                return Err(Error::InvalidLayout(format!(
                    "background image {} does not exist",
                    image.display()
                )));
            }
            store.set_background_image_with(&image, fs)?;
        }
    }

    for item in &layout.items {
        if fs.stat(&volume_root.join(&item.name)).is_err() {
            log::warn!(
                "{} is positioned but not present in {}",
                item.name,
                volume_root.display()
            );
        }
        store.set_icon_position(&item.name, item.x, item.y);
    }

    Ok(store)
}

/// Copies `image` into `<volume_root>/.background/`.
///
/// Returns the copied picture's path relative to the volume root, ready for
/// [`DmgBackground::Image`].
pub fn stage_background_image(volume_root: &Path, image: &Path) -> Result<PathBuf> {
    let file_name = image.file_name().ok_or_else(|| {
        Error::GenericError(format!("Invalid background image path: {}", image.display()))
    })?;

    let bg_dir = volume_root.join(BACKGROUND_DIR);
    fs::create_dir_all(&bg_dir)?;
    fs::copy_file(image, &bg_dir.join(file_name))?;

    log::debug!("Copied background image to {}", bg_dir.join(file_name).display());
    Ok(Path::new(BACKGROUND_DIR).join(file_name))
}
