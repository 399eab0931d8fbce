use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::model::{WindowId, WindowRecord};
use system_ui::{
    ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Whether the event started on a titlebar control rather than the drag region.
#[cfg(target_arch = "wasm32")]
fn event_targets_control(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest("button").ok().flatten())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn event_targets_control(_: &web_sys::Event) -> bool {
    false
}

/// Mounts configured markup into the body. Scripts inserted via `innerHTML` never run, so each
/// one is replaced by a fresh copy.
#[cfg(target_arch = "wasm32")]
fn mount_window_content(body: &web_sys::Element, content: &str) {
    body.set_inner_html(content);
    let Some(document) = body.owner_document() else {
        return;
    };
    let Ok(scripts) = body.query_selector_all("script") else {
        return;
    };
    for index in 0..scripts.length() {
        let Some(old) = scripts
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let Ok(fresh) = document.create_element("script") else {
            continue;
        };
        for name in old.get_attribute_names().iter() {
            let Some(name) = name.as_string() else {
                continue;
            };
            if let Some(value) = old.get_attribute(&name) {
                let _ = fresh.set_attribute(&name, &value);
            }
        }
        fresh.set_text_content(old.text_content().as_deref());
        if let Some(parent) = old.parent_node() {
            if let Err(err) = parent.replace_child(&fresh, &old) {
                logging::warn!("activate window script failed: {err:?}");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mount_window_content(_: &web_sys::Element, _: &str) {}

#[cfg(target_arch = "wasm32")]
fn pause_media(body: &web_sys::Element) {
    let Ok(media) = body.query_selector_all("video, audio") else {
        return;
    };
    for index in 0..media.length() {
        if let Some(element) = media
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlMediaElement>().ok())
        {
            let _ = element.pause();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn pause_media(_: &web_sys::Element) {}

fn window_style(win: &WindowRecord) -> String {
    let mut style = format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
    );
    if win.minimized {
        style.push_str("display:none;");
    }
    style
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.window(window_id).cloned())
    });
    let Some(initial) = window.get_untracked() else {
        return ().into_view();
    };

    let flag = move |read: fn(&WindowRecord) -> bool| {
        Signal::derive(move || window.with(|win| win.as_ref().is_some_and(read)))
    };
    let focused = flag(|win| win.is_focused);
    let minimized = flag(|win| win.minimized);
    let maximized = flag(|win| win.maximized);
    let style = Signal::derive(move || window.with(|win| win.as_ref().map(window_style).unwrap_or_default()));

    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id,
            viewport: runtime.viewport(),
        });
    };
    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) || event_targets_control(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let titlebar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        if event_targets_control(&ev) {
            return;
        }
        ev.prevent_default();
        toggle_maximize();
    });

    let body_ref = create_node_ref::<html::Div>();
    let mounted_body: Rc<RefCell<Option<web_sys::Element>>> = Rc::new(RefCell::new(None));
    {
        let mounted_body = Rc::clone(&mounted_body);
        let content = initial.app.content.as_str().to_string();
        body_ref.on_load(move |body| {
            let body: web_sys::Element = (*body).clone().into();
            mount_window_content(&body, &content);
            *mounted_body.borrow_mut() = Some(body);
        });
    }
    on_cleanup(move || {
        if let Some(body) = mounted_body.borrow_mut().take() {
            pause_media(&body);
        }
    });

    let title = initial.title().to_string();
    let icon = initial.app.icon.clone();

    view! {
        <WindowFrame
            id=initial.surface_id()
            style=style
            aria_label=title.clone()
            focused=focused
            minimized=minimized
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move on_dblclick=titlebar_double_click>
                <WindowTitle title=title icon=icon />
                <WindowControls>
                    <WindowControlButton
                        ui_slot="minimize"
                        aria_label="Minimize window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        })
                    >
                        "_"
                    </WindowControlButton>
                    <WindowControlButton
                        ui_slot="maximize"
                        aria_label=Signal::derive(move || {
                            let label = if maximized.get() { "Restore window" } else { "Maximize window" };
                            label.to_string()
                        })
                        on_click=Callback::new(move |_| toggle_maximize())
                    >
                        "□"
                    </WindowControlButton>
                    <WindowControlButton
                        ui_slot="close"
                        aria_label="Close window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        })
                    >
                        "X"
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody body_ref=body_ref />
            <Show when=move || !maximized.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id=window_id edge=edge /> })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
    .into_view()
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=resize_edge_token(edge) on_pointerdown=on_pointerdown /> }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{ApplicationDescriptor, WindowRect};

    fn record(minimized: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId(3),
            app: Rc::new(ApplicationDescriptor::new("Paint")),
            rect: WindowRect {
                x: 10,
                y: 20,
                w: 300,
                h: 200,
            },
            restore_rect: None,
            z_index: 104,
            is_focused: !minimized,
            minimized,
            maximized: false,
        }
    }

    #[test]
    fn style_positions_the_surface() {
        assert_eq!(
            window_style(&record(false)),
            "left:10px;top:20px;width:300px;height:200px;z-index:104;"
        );
    }

    #[test]
    fn minimized_surface_is_hidden_but_keeps_its_rank() {
        assert_eq!(
            window_style(&record(true)),
            "left:10px;top:20px;width:300px;height:200px;z-index:104;display:none;"
        );
    }
}
