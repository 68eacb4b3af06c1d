use crate::bundler::{
    error::PlistSourceError,
    platform::macos::dsstore::bplist::{PlistEncoder, wrap},
};
use plist::{Dictionary, Value};

/// Finder window geometry and chrome (`bwsp`).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceSettings {
    /// Window left edge
    pub x: i32,
    /// Window top edge
    pub y: i32,
    /// Window width
    pub width: i32,
    /// Window height
    pub height: i32,
    /// Sidebar visible in the container
    pub container_show_sidebar: bool,
    /// Path bar visible
    pub show_pathbar: bool,
    /// Sidebar visible
    pub show_sidebar: bool,
    /// Status bar visible
    pub show_status_bar: bool,
    /// Tab bar visible
    pub show_tab_view: bool,
    /// Toolbar visible
    pub show_toolbar: bool,
    /// Sidebar width in points
    pub sidebar_width: i32,
}

impl WorkspaceSettings {
    /// Bounds with the chrome Finder uses for disk image windows.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            container_show_sidebar: true,
            show_pathbar: false,
            show_sidebar: true,
            show_status_bar: false,
            show_tab_view: false,
            show_toolbar: false,
            sidebar_width: 0,
        }
    }

    /// `{{x, y}, {width, height}}`
    pub fn window_bounds(&self) -> String {
        format!(
            "{{{{{}, {}}}, {{{}, {}}}}}",
            self.x, self.y, self.width, self.height
        )
    }

    fn dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert(
            "ContainerShowSidebar".into(),
            Value::Boolean(self.container_show_sidebar),
        );
        dict.insert("ShowPathbar".into(), Value::Boolean(self.show_pathbar));
        dict.insert("ShowSidebar".into(), Value::Boolean(self.show_sidebar));
        dict.insert("ShowStatusBar".into(), Value::Boolean(self.show_status_bar));
        dict.insert("ShowTabView".into(), Value::Boolean(self.show_tab_view));
        dict.insert("ShowToolbar".into(), Value::Boolean(self.show_toolbar));
        dict.insert(
            "SidebarWidth".into(),
            Value::Integer(i64::from(self.sidebar_width).into()),
        );
        dict.insert("WindowBounds".into(), Value::String(self.window_bounds()));
        dict
    }

    pub(super) fn encode(&self, encoder: &dyn PlistEncoder) -> Result<Vec<u8>, PlistSourceError> {
        Ok(wrap(&encoder.encode(&self.dictionary())?))
    }
}
