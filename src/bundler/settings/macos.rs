//! macOS disk image window layout settings.

use crate::bundler::error::{Error, ErrorExt, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Finder window layout for a disk image volume.
///
/// # Configuration
///
/// ```toml
/// icon_size = 100
/// label_size = 14
/// background = { image = ".background/background.png" }
///
/// [window]
/// width = 640
/// height = 480
///
/// [[items]]
/// name = "MyApp.app"
/// x = 160
/// y = 240
///
/// [[items]]
/// name = "Applications"
/// x = 480
/// y = 240
/// ```
///
/// JSON files with the same structure are accepted too.
///
/// # See Also
///
/// - [`apply_dmg_customizations`](crate::bundler::platform::macos::dmg::apply_dmg_customizations)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmgLayout {
    /// Window bounds.
    ///
    /// Default: 640x480 at the origin
    pub window: WindowBounds,

    /// Icon size in points.
    ///
    /// Default: 128
    pub icon_size: f64,

    /// Label font size in points.
    ///
    /// Default: 12
    pub label_size: f64,

    /// Labels below icons rather than to their right.
    ///
    /// Default: true
    pub label_on_bottom: bool,

    /// What Finder paints behind the icons.
    ///
    /// Default: the system background
    pub background: DmgBackground,

    /// Icon positions, by item name in the volume root.
    ///
    /// Default: Empty
    pub items: Vec<ItemPosition>,
}

/// Window position and size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowBounds {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 640,
            height: 480,
        }
    }
}

/// Window background.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DmgBackground {
    /// System default
    #[default]
    Default,
    /// Solid colour, components in `0.0..=1.0`
    Color([f64; 3]),
    /// Picture, relative to the volume root
    Image(PathBuf),
}

/// Where one item's icon centre sits in the window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPosition {
    pub name: String,
    pub x: u32,
    pub y: u32,
}

impl Default for DmgLayout {
    fn default() -> Self {
        Self {
            window: WindowBounds::default(),
            icon_size: 128.0,
            label_size: 12.0,
            label_on_bottom: true,
            background: DmgBackground::Default,
            items: Vec::new(),
        }
    }
}

impl DmgLayout {
    /// Standard drag-to-install layout: the app at one third of the window,
    /// the `Applications` link at two thirds, both vertically centred.
    pub fn centered(app_name: &str, width: i32, height: i32, icon_size: f64, label_size: f64) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        let center_y = to_coordinate(h / 2.0 - icon_size / 2.0 + label_size);

        Self {
            window: WindowBounds {
                width,
                height,
                ..WindowBounds::default()
            },
            icon_size,
            label_size,
            items: vec![
                ItemPosition {
                    name: app_name.to_string(),
                    x: to_coordinate(w / 3.0 - icon_size / 2.0),
                    y: center_y,
                },
                ItemPosition {
                    name: "Applications".to_string(),
                    x: to_coordinate(w / 3.0 * 2.0 + icon_size / 2.0),
                    y: center_y,
                },
            ],
            ..Self::default()
        }
    }

    /// Parses a TOML layout.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parses a JSON layout.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads a layout file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).fs_context("failed to read layout", path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let layout = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };
        log::debug!("loaded layout from {}", path.display());
        Ok(layout)
    }

    /// Rejects layouts Finder cannot display.
    pub fn validate(&self) -> Result<()> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(Error::InvalidLayout(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !(self.icon_size.is_finite() && self.icon_size > 0.0) {
            return Err(Error::InvalidLayout(format!(
                "icon size must be positive, got {}",
                self.icon_size
            )));
        }
        if !(self.label_size.is_finite() && self.label_size > 0.0) {
            return Err(Error::InvalidLayout(format!(
                "label size must be positive, got {}",
                self.label_size
            )));
        }
        if let DmgBackground::Color(rgb) = &self.background {
            if rgb.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(Error::InvalidLayout(format!(
                    "background colour components must be within 0.0..=1.0, got {rgb:?}"
                )));
            }
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if item.name.is_empty() {
                return Err(Error::InvalidLayout("item name cannot be empty".into()));
            }
            if !seen.insert(item.name.as_str()) {
                return Err(Error::InvalidLayout(format!(
                    "item {:?} is positioned twice",
                    item.name
                )));
            }
        }
        Ok(())
    }
}

fn to_coordinate(value: f64) -> u32 {
    value.max(0.0) as u32
}
