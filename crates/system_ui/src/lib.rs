//! Shared UI primitive library for the retro desktop shell.
//!
//! The crate owns reusable Leptos primitives for the desktop, windows, taskbar, start menu, and
//! modal overlays, plus the stable `data-ui-*` DOM contract consumed by the shell stylesheet.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{AppIcon, IconSize};
pub use primitives::{
    Button, ButtonVariant, ClockDisplay, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
    DesktopRoot, DesktopWindowLayer, IconColumn, MenuItem, MenuSurface, ModalDialog, ModalFooter,
    ModalOverlay, PaletteGrid, PaletteSwatch, ResizeHandle, Taskbar, TaskbarButton,
    TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

/// Convenience imports for shell crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppIcon, Button, ButtonVariant, ClockDisplay, DesktopBackdrop, DesktopIconButton,
        DesktopIconGrid, DesktopRoot, DesktopWindowLayer, IconColumn, IconSize, MenuItem,
        MenuSurface, ModalDialog, ModalFooter, ModalOverlay, PaletteGrid, PaletteSwatch,
        ResizeHandle, Taskbar, TaskbarButton, TaskbarSection, WindowBody, WindowControlButton,
        WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
    };
}
