//! Shared structural, shell, overlay, and control primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{AppIcon, IconSize};

mod controls;
mod overlays;
mod shell;

pub use controls::Button;
pub use overlays::{
    MenuItem, MenuSurface, ModalDialog, ModalFooter, ModalOverlay, PaletteGrid, PaletteSwatch,
};
pub use shell::{
    ClockDisplay, DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot,
    DesktopWindowLayer, ResizeHandle, Taskbar, TaskbarButton, TaskbarSection, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Raised bevelled button.
    #[default]
    Standard,
    /// Borderless button used inside menus and title bars.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Desktop shortcut column.
pub enum IconColumn {
    /// Left-hand column.
    #[default]
    Start,
    /// Right-hand column.
    End,
}

impl IconColumn {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Inline style for surfaces that start pointer drags: touch input on them must not pan or zoom.
pub(crate) const GESTURE_SURFACE_STYLE: &str = "touch-action:none;";

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("start-button")),
            "ui-button start-button"
        );
    }

    #[test]
    fn gesture_surfaces_disable_touch_panning() {
        assert_eq!(GESTURE_SURFACE_STYLE, "touch-action:none;");
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(IconColumn::End.token(), "end");
    }
}
