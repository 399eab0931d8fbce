//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    apps::AppRegistry,
    model::{
        AppContent, AppHandle, ApplicationDescriptor, DesktopAppearance, DesktopState,
        InteractionState, PlacementSample, PointerPosition, ResizeEdge, WindowId,
        WindowManagerConfig, WindowRect,
    },
    window_manager::{
        apply_drag, apply_resize, begin_drag, begin_resize, close_window, minimize_window,
        normalize_window_stack, open_window, raise_window, toggle_maximize,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Launch an application: open a window, raise the existing one, or run a script.
    ///
    /// The descriptor need not be registered; instances are matched by application name.
    LaunchApp {
        /// Descriptor whose content a new window mounts.
        app: AppHandle,
        /// Desktop area new windows are placed in.
        viewport: WindowRect,
        /// Random sample for the new window's origin.
        placement: PlacementSample,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize into the viewport, or restore the saved geometry.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
        /// Viewport rectangle to maximize into.
        viewport: WindowRect,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Toggle taskbar behavior for a window (focus, minimize, or restore).
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Begin dragging a window by its header.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Replace the application registry.
    LoadRegistry {
        /// Descriptors in configuration order; disabled entries are dropped.
        descriptors: Vec<ApplicationDescriptor>,
    },
    /// Replace window-manager tunables.
    ConfigureWindowManager {
        /// New tunables.
        config: WindowManagerConfig,
    },
    /// Set the resolved desktop appearance.
    SetAppearance {
        /// Background, title, and theme color.
        appearance: DesktopAppearance,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Run a script-only application's payload in the page.
    ExecuteScript(AppContent),
    /// A window was removed; its surface and taskbar proxy are gone.
    WindowClosed(WindowId),
    /// Push the desktop appearance into the document.
    ApplyAppearance(DesktopAppearance),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference something that does not exist.
///
/// The state is left untouched when one of these is returned.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for desktop window management.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not present.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::LaunchApp {
            app,
            viewport,
            placement,
        } => {
            state.start_menu_open = false;
            if app.js_only {
                effects.push(RuntimeEffect::ExecuteScript(app.content.clone()));
            } else {
                let outcome = open_window(state, app, viewport, placement);
                raise_window(state, outcome.window_id);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            ensure_window(state, window_id)?;
            raise_window(state, window_id);
            state.start_menu_open = false;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            ensure_window(state, window_id)?;
            minimize_window(state, window_id);
        }
        DesktopAction::ToggleMaximize {
            window_id,
            viewport,
        } => {
            ensure_window(state, window_id)?;
            if toggle_maximize(state, window_id, viewport) {
                raise_window(state, window_id);
            }
        }
        DesktopAction::CloseWindow { window_id } => {
            ensure_window(state, window_id)?;
            interaction.release_window(window_id);
            close_window(state, window_id);
            effects.push(RuntimeEffect::WindowClosed(window_id));
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let window = state.window(window_id).ok_or(ReducerError::WindowNotFound)?;
            let minimized = window.minimized;
            let focused = window.is_focused;
            if minimized {
                raise_window(state, window_id);
            } else if focused {
                minimize_window(state, window_id);
            } else {
                raise_window(state, window_id);
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            ensure_window(state, window_id)?;
            if let Some(session) = begin_drag(state, window_id, pointer) {
                raise_window(state, window_id);
                interaction.dragging = Some(session);
                interaction.resizing = None;
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging {
                apply_drag(state, &session, pointer);
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            ensure_window(state, window_id)?;
            if let Some(session) = begin_resize(state, window_id, edge, pointer) {
                raise_window(state, window_id);
                interaction.resizing = Some(session);
                interaction.dragging = None;
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing {
                apply_resize(state, &session, pointer);
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::LoadRegistry { descriptors } => {
            state.registry = AppRegistry::from_descriptors(descriptors);
        }
        DesktopAction::ConfigureWindowManager { config } => {
            state.next_z_index = state.next_z_index.max(config.base_z_index);
            state.config = config;
        }
        DesktopAction::SetAppearance { appearance } => {
            state.appearance = appearance.clone();
            effects.push(RuntimeEffect::ApplyAppearance(appearance));
        }
    }

    normalize_window_stack(state);
    Ok(effects)
}

fn ensure_window(state: &DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    state
        .window(window_id)
        .map(|_| ())
        .ok_or(ReducerError::WindowNotFound)
}
