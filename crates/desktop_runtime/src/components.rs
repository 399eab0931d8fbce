//! Desktop shell UI composition: shortcut columns, window layer, start menu, taskbar, and modal
//! overlays.

mod overlays;
mod start_menu;
mod taskbar;
mod window;

use std::rc::Rc;

use leptos::*;
use system_ui::{DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, IconColumn};

use self::{
    overlays::DesktopOverlays, start_menu::StartMenu, taskbar::DesktopTaskbar,
    window::DesktopWindow,
};
use crate::{
    model::{Alignment, DesktopAppearance, PointerPosition, ResizeEdge},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Height of the taskbar strip; the desktop area is the viewport minus this.
pub(crate) const TASKBAR_HEIGHT_PX: i32 = 38;

#[component]
/// Root desktop shell. Must be rendered inside [`DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let interaction = runtime.interaction.get_untracked();
        if !interaction.is_active() {
            return;
        }
        // Keeps touch drags from scrolling the page.
        ev.prevent_default();
        let pointer = pointer_from_pointer_event(&ev);
        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    let background = move || state.with(|desktop| background_style(&desktop.appearance));

    view! {
        <DesktopRoot
            id="desktop"
            style=Signal::derive(background)
            on_click=Callback::new(move |_| {
                if runtime.state.with_untracked(|desktop| desktop.start_menu_open) {
                    runtime.dispatch_action(DesktopAction::CloseStartMenu);
                }
            })
        >
            <div
                class="desktop-pointer-surface"
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_end
                on:pointercancel=on_pointer_end
            >
                <DesktopBackdrop>
                    <ShortcutColumn alignment=Alignment::Start />
                    <ShortcutColumn alignment=Alignment::End />

                    <DesktopWindowLayer>
                        <For
                            each=move || {
                                state.with(|desktop| {
                                    desktop.windows.iter().map(|win| win.id).collect::<Vec<_>>()
                                })
                            }
                            key=|window_id| window_id.0
                            let:window_id
                        >
                            <DesktopWindow window_id=window_id />
                        </For>
                    </DesktopWindowLayer>
                </DesktopBackdrop>
            </div>

            <StartMenu />
            <DesktopTaskbar />
            <DesktopOverlays />
        </DesktopRoot>
    }
}

#[component]
fn ShortcutColumn(alignment: Alignment) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let shortcuts = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.registry.shortcuts(alignment))
    });
    let column = match alignment {
        Alignment::Start => IconColumn::Start,
        Alignment::End => IconColumn::End,
    };

    view! {
        <DesktopIconGrid column=column>
            <For
                each=move || shortcuts.get().into_iter().enumerate()
                key=|(index, app)| (*index, app.name.as_str().to_string())
                let:entry
            >
                {
                    let (_, app) = entry;
                    let label = app.name.as_str().to_string();
                    let icon = app.icon.clone();
                    view! {
                        <DesktopIconButton
                            label=label
                            icon=icon
                            on_click=Callback::new(move |_| runtime.launch_app(Rc::clone(&app)))
                        />
                    }
                }
            </For>
        </DesktopIconGrid>
    }
}

fn background_style(appearance: &DesktopAppearance) -> String {
    appearance
        .background
        .as_deref()
        .map(|url| format!("background-image: url({url});"))
        .unwrap_or_default()
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary mouse button or the primary touch/pen contact.
fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

fn resize_edge_token(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::South => "s",
        ResizeEdge::East => "e",
        ResizeEdge::SouthEast => "se",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn background_is_empty_until_configured() {
        let mut appearance = DesktopAppearance::default();
        assert_eq!(background_style(&appearance), "");

        appearance.background = Some("img/clouds.jpg".to_string());
        assert_eq!(
            background_style(&appearance),
            "background-image: url(img/clouds.jpg);"
        );
    }

    #[test]
    fn every_resize_edge_has_a_distinct_token() {
        let tokens: Vec<_> = ResizeEdge::ALL.into_iter().map(resize_edge_token).collect();
        assert_eq!(tokens, vec!["se", "s", "e"]);
    }
}
