//! macOS DMG window layout.
//!
//! Lays out the Finder window of a disk image volume: window bounds, icon
//! size, label style, background and per-item icon positions. Creating,
//! converting and signing the image itself is left to `hdiutil` and friends.

mod customization;

pub use customization::{
    BACKGROUND_DIR, DS_STORE_FILE, apply_dmg_customizations, build_ds_store,
    stage_background_image,
};
