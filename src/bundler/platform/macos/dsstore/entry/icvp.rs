use crate::bundler::{
    error::PlistSourceError,
    platform::macos::dsstore::bplist::{PlistEncoder, wrap},
};
use plist::{Dictionary, Value};

/// What Finder paints behind the icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundType {
    /// System default
    Default,
    /// Solid colour from the `backgroundColor*` keys
    Color,
    /// Picture referenced by `backgroundImageAlias`
    Picture,
}

impl BackgroundType {
    fn code(self) -> i64 {
        match self {
            Self::Default => 0,
            Self::Color => 1,
            Self::Picture => 2,
        }
    }
}

/// Icon view options for a folder (`icvp`).
#[derive(Debug, Clone, PartialEq)]
pub struct IconViewPreferences {
    /// What Finder paints behind the icons
    pub background_type: BackgroundType,
    /// Red component of the solid background, `0.0..=1.0`
    pub background_color_red: f64,
    /// Green component of the solid background, `0.0..=1.0`
    pub background_color_green: f64,
    /// Blue component of the solid background, `0.0..=1.0`
    pub background_color_blue: f64,
    /// Alias record of the background picture
    pub background_image_alias: Option<Vec<u8>>,
    /// Render file contents as icons
    pub show_icon_preview: bool,
    /// Show item details under labels
    pub show_item_info: bool,
    /// Label font size
    pub text_size: f64,
    /// Icon edge length in points
    pub icon_size: f64,
    /// Plist schema version
    pub view_options_version: i32,
    /// Grid cell size in points
    pub grid_spacing: f64,
    /// Horizontal grid offset
    pub grid_offset_x: f64,
    /// Vertical grid offset
    pub grid_offset_y: f64,
    /// Labels below icons rather than to the right
    pub label_on_bottom: bool,
    /// Sort key, `none` keeps manual positions
    pub arrange_by: String,
}

impl Default for IconViewPreferences {
    fn default() -> Self {
        Self::new(128.0)
    }
}

impl IconViewPreferences {
    /// White background with the given icon size.
    pub fn new(icon_size: f64) -> Self {
        Self {
            background_type: BackgroundType::Color,
            background_color_red: 1.0,
            background_color_green: 1.0,
            background_color_blue: 1.0,
            background_image_alias: None,
            show_icon_preview: true,
            show_item_info: true,
            text_size: 12.0,
            icon_size,
            view_options_version: 1,
            grid_spacing: 100.0,
            grid_offset_x: 0.0,
            grid_offset_y: 0.0,
            label_on_bottom: false,
            arrange_by: "none".to_string(),
        }
    }

    /// Falls back to the system background.
    pub fn set_background_default(&mut self) {
        self.background_type = BackgroundType::Default;
        self.background_image_alias = None;
    }

    /// Solid background; components are in `0.0..=1.0`.
    pub fn set_background_color(&mut self, r: f64, g: f64, b: f64) {
        self.background_type = BackgroundType::Color;
        self.background_color_red = r;
        self.background_color_green = g;
        self.background_color_blue = b;
        self.background_image_alias = None;
    }

    /// Picture background from an encoded alias record.
    pub fn set_background_image_alias(&mut self, alias: Vec<u8>) {
        self.background_type = BackgroundType::Picture;
        self.background_image_alias = Some(alias);
    }

    fn dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert(
            "backgroundType".into(),
            Value::Integer(self.background_type.code().into()),
        );
        dict.insert(
            "backgroundColorRed".into(),
            Value::Real(self.background_color_red),
        );
        dict.insert(
            "backgroundColorGreen".into(),
            Value::Real(self.background_color_green),
        );
        dict.insert(
            "backgroundColorBlue".into(),
            Value::Real(self.background_color_blue),
        );
        dict.insert(
            "showIconPreview".into(),
            Value::Boolean(self.show_icon_preview),
        );
        dict.insert("showItemInfo".into(), Value::Boolean(self.show_item_info));
        dict.insert("textSize".into(), Value::Real(self.text_size));
        dict.insert("iconSize".into(), Value::Real(self.icon_size));
        dict.insert(
            "viewOptionsVersion".into(),
            Value::Integer(i64::from(self.view_options_version).into()),
        );
        dict.insert("gridSpacing".into(), Value::Real(self.grid_spacing));
        dict.insert("gridOffsetX".into(), Value::Real(self.grid_offset_x));
        dict.insert("gridOffsetY".into(), Value::Real(self.grid_offset_y));
        dict.insert("labelOnBottom".into(), Value::Boolean(self.label_on_bottom));
        dict.insert("arrangeBy".into(), Value::String(self.arrange_by.clone()));

        if self.background_type == BackgroundType::Picture {
            if let Some(alias) = &self.background_image_alias {
                dict.insert("backgroundImageAlias".into(), Value::Data(alias.clone()));
            }
        }
        dict
    }

    pub(super) fn encode(&self, encoder: &dyn PlistEncoder) -> Result<Vec<u8>, PlistSourceError> {
        Ok(wrap(&encoder.encode(&self.dictionary())?))
    }
}
