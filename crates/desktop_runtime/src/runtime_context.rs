//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the modal overlay
//! stack, and host bootstrap wiring. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;
use platform_host::HostServices;

use crate::{
    components::TASKBAR_HEIGHT_PX,
    effect_executor,
    host::DesktopHostContext,
    model::{AppHandle, AppName, DesktopState, InteractionState, WindowRect},
    overlays::{ConfirmFn, DialogKind, DialogOutcome, OverlayCallback, OverlayId, OverlayStack, SelectFn},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Open modal dialogs and palette pickers.
    pub overlays: RwSignal<OverlayStack>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Current desktop area available to windows.
    pub fn viewport(&self) -> WindowRect {
        self.host.get_value().desktop_viewport_rect(TASKBAR_HEIGHT_PX)
    }

    /// Launches `app`, placing a new window inside the current viewport.
    pub fn launch_app(&self, app: AppHandle) {
        let host = self.host.get_value();
        self.dispatch_action(DesktopAction::LaunchApp {
            app,
            viewport: host.desktop_viewport_rect(TASKBAR_HEIGHT_PX),
            placement: host.placement_sample(),
        });
    }

    /// Launches the first enabled registry entry named `name`.
    pub fn launch_app_by_name(&self, name: &str) {
        let name = AppName::new(name);
        match self.state.with_untracked(|desktop| desktop.registry.find(&name)) {
            Some(app) => self.launch_app(app),
            None => logging::warn!("no application named `{}` is registered", name.as_str()),
        }
    }

    /// Opens an informational or confirm dialog above every window.
    pub fn show_dialog(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: DialogKind,
        on_confirm: Option<ConfirmFn>,
    ) -> OverlayId {
        let (title, message) = (title.into(), message.into());
        let mut id = OverlayId(0);
        self.overlays
            .update(|stack| id = stack.show_dialog(title, message, kind, on_confirm));
        id
    }

    /// Opens the color palette picker above every window.
    pub fn show_palette(&self, title: impl Into<String>, on_select: Option<SelectFn>) -> OverlayId {
        let title = title.into();
        let mut id = OverlayId(0);
        self.overlays
            .update(|stack| id = stack.show_palette(title, on_select));
        id
    }

    /// Dismisses a dialog, running its confirm callback when the outcome calls for it.
    pub fn dismiss_dialog(&self, id: OverlayId, outcome: DialogOutcome) {
        let mut released = None;
        self.overlays
            .update(|stack| released = stack.dismiss_dialog(id, outcome));
        run_released(released);
    }

    /// Dismisses a palette picker; `Some(color)` runs the selection callback.
    pub fn dismiss_palette(&self, id: OverlayId, color: Option<String>) {
        let mut released = None;
        self.overlays
            .update(|stack| released = stack.dismiss_palette(id, color));
        run_released(released);
    }

    /// Shows the host install prompt, or explains why it is unavailable.
    pub fn request_install(&self) {
        self.host.get_value().request_install(*self);
    }
}

// Callbacks run after the overlay signal update so they may open further overlays.
fn run_released(released: Option<OverlayCallback>) {
    if let Some(callback) = released {
        callback.invoke();
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    effect_executor::install(runtime);
    let host = runtime.host.get_value();
    host.install_page_api(runtime);
    host.install_boot_sequence(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots the desktop.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let overlays = create_rw_signal(OverlayStack::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::debug_warn!("desktop reducer ignored action: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        overlays,
        dispatch,
    };

    provide_context(runtime.clone());

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
