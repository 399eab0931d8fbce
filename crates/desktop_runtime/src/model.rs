use std::{fmt, rc::Rc};

use serde::{Deserialize, Serialize};

/// Default upper bound for a freshly opened window's width.
pub const DEFAULT_MAX_INITIAL_WIDTH: i32 = 600;
/// Default upper bound for a freshly opened window's height.
pub const DEFAULT_MAX_INITIAL_HEIGHT: i32 = 400;
/// Default minimum managed window width.
pub const DEFAULT_MIN_WINDOW_WIDTH: i32 = 200;
/// Default minimum managed window height.
pub const DEFAULT_MIN_WINDOW_HEIGHT: i32 = 150;
/// Default stacking rank below the first window.
pub const DEFAULT_BASE_Z_INDEX: u32 = 100;
/// Default distance between the top window and modal overlays.
pub const DEFAULT_OVERLAY_Z_OFFSET: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// Identity key of an application. Descriptors sharing a name are one logical application.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppName(pub String);

impl AppName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque markup or script payload hosted in a window body.
///
/// The window manager mounts and unmounts it; it never inspects the contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppContent(pub String);

impl AppContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which desktop column a shortcut is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    #[serde(rename = "left", alias = "start")]
    Start,
    #[serde(rename = "right", alias = "end")]
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDescriptor {
    pub name: AppName,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub content: AppContent,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, rename = "align")]
    pub alignment: Alignment,
    #[serde(default)]
    pub autostart: bool,
    /// Runs `content` as a script instead of opening a window.
    #[serde(default)]
    pub js_only: bool,
}

fn default_enabled() -> bool {
    true
}

impl ApplicationDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: AppName::new(name),
            icon: String::new(),
            content: AppContent::default(),
            enabled: true,
            alignment: Alignment::Start,
            autostart: false,
            js_only: false,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = AppContent(content.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// Shared immutable handle to a descriptor. Windows hold one without owning the registry entry.
pub type AppHandle = Rc<ApplicationDescriptor>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// Rectangle at the origin covering `self`'s full extent.
    pub fn filled(self) -> Self {
        Self {
            x: 0,
            y: 0,
            w: self.w,
            h: self.h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Two uniform samples in `[0, 1)` used to place a new window inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementSample {
    pub x: f64,
    pub y: f64,
}

impl PlacementSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }
}

/// Window-manager tunables. Decoded from the `window_manager` section of the desktop config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowManagerConfig {
    pub min_width: i32,
    pub min_height: i32,
    pub max_initial_width: i32,
    pub max_initial_height: i32,
    /// Fraction of the viewport a new window may cover in each dimension.
    pub initial_fill_ratio: f64,
    pub base_z_index: u32,
    pub overlay_z_offset: u32,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WINDOW_WIDTH,
            min_height: DEFAULT_MIN_WINDOW_HEIGHT,
            max_initial_width: DEFAULT_MAX_INITIAL_WIDTH,
            max_initial_height: DEFAULT_MAX_INITIAL_HEIGHT,
            initial_fill_ratio: 0.9,
            base_z_index: DEFAULT_BASE_Z_INDEX,
            overlay_z_offset: DEFAULT_OVERLAY_Z_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app: AppHandle,
    pub rect: WindowRect,
    /// Pre-maximize geometry; `Some` only while maximized.
    pub restore_rect: Option<WindowRect>,
    pub z_index: u32,
    pub is_focused: bool,
    pub minimized: bool,
    pub maximized: bool,
}

impl WindowRecord {
    pub fn title(&self) -> &str {
        self.app.name.as_str()
    }

    /// DOM id of this window's taskbar proxy.
    pub fn taskbar_proxy_id(&self) -> String {
        taskbar_proxy_dom_id(self.id)
    }

    /// DOM id of this window's surface.
    pub fn surface_id(&self) -> String {
        window_surface_dom_id(self.id)
    }
}

pub fn taskbar_proxy_dom_id(window_id: WindowId) -> String {
    format!("taskbar-window-{}", window_id.0)
}

pub fn window_surface_dom_id(window_id: WindowId) -> String {
    format!("window-{}", window_id.0)
}

/// Resolved desktop appearance (background, document title, theme color).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopAppearance {
    pub background: Option<String>,
    pub title: String,
    pub theme_color: String,
}

/// Window-manager context: registry, instance store, and stacking counters.
///
/// One value per desktop session; tests build a fresh one each.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub next_window_id: u64,
    /// Last stacking rank handed out. Ranks are never reused.
    pub next_z_index: u32,
    /// Open windows in open order. Stacking order comes from `z_index`.
    pub windows: Vec<WindowRecord>,
    pub registry: crate::apps::AppRegistry,
    pub config: WindowManagerConfig,
    pub appearance: DesktopAppearance,
    pub start_menu_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_config(WindowManagerConfig::default())
    }
}

impl DesktopState {
    pub fn with_config(config: WindowManagerConfig) -> Self {
        Self {
            next_window_id: 1,
            next_z_index: config.base_z_index,
            windows: Vec::new(),
            registry: crate::apps::AppRegistry::default(),
            config,
            appearance: DesktopAppearance::default(),
            start_menu_open: false,
        }
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    South,
    East,
    SouthEast,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 3] = [Self::SouthEast, Self::South, Self::East];

    pub fn resizes_width(self) -> bool {
        matches!(self, Self::East | Self::SouthEast)
    }

    pub fn resizes_height(self) -> bool {
        matches!(self, Self::South | Self::SouthEast)
    }
}

/// Active header drag. `offset` is the pointer position relative to the window origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub offset: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub width_start: i32,
    pub height_start: i32,
}

/// Pointer gesture slots. At most one drag or resize session is live at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some()
    }

    /// Drops any session bound to `window_id`.
    pub fn release_window(&mut self, window_id: WindowId) {
        if self.dragging.is_some_and(|s| s.window_id == window_id) {
            self.dragging = None;
        }
        if self.resizing.is_some_and(|s| s.window_id == window_id) {
            self.resizing = None;
        }
    }
}
