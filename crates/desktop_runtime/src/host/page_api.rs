//! Global functions exposed on `window` for scripts hosted inside window content.
//!
//! * `openApp(name)` launches a registered application.
//! * `showModal(title, message, type, onConfirm)` opens an info or confirm dialog.
//! * `showColorPicker(title, onSelect)` opens the palette picker.
//! * `installPWA()` triggers the install flow.

#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Reflect};
#[cfg(target_arch = "wasm32")]
use leptos::logging;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
use crate::overlays::{ConfirmFn, DialogKind, SelectFn};
use crate::runtime_context::DesktopRuntimeContext;

pub(super) fn install(runtime: DesktopRuntimeContext) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };

        let open_app = Closure::<dyn Fn(JsValue)>::new(move |name: JsValue| match name.as_string() {
            Some(name) => runtime.launch_app_by_name(&name),
            None => logging::warn!("openApp expects an application name"),
        });
        expose(&window, "openApp", open_app.into_js_value());

        let show_modal = Closure::<dyn Fn(JsValue, JsValue, JsValue, JsValue)>::new(
            move |title: JsValue, message: JsValue, kind: JsValue, on_confirm: JsValue| {
                let kind = kind
                    .as_string()
                    .map(|kind| DialogKind::from_script_value(&kind))
                    .unwrap_or_default();
                let on_confirm = on_confirm.dyn_into::<Function>().ok().map(|callback| {
                    Box::new(move || {
                        if let Err(err) = callback.call0(&JsValue::NULL) {
                            logging::warn!("showModal confirm callback threw: {err:?}");
                        }
                    }) as ConfirmFn
                });
                runtime.show_dialog(
                    title.as_string().unwrap_or_default(),
                    message.as_string().unwrap_or_default(),
                    kind,
                    on_confirm,
                );
            },
        );
        expose(&window, "showModal", show_modal.into_js_value());

        let show_color_picker = Closure::<dyn Fn(JsValue, JsValue)>::new(
            move |title: JsValue, on_select: JsValue| {
                let on_select = on_select.dyn_into::<Function>().ok().map(|callback| {
                    Box::new(move |color: String| {
                        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&color)) {
                            logging::warn!("showColorPicker select callback threw: {err:?}");
                        }
                    }) as SelectFn
                });
                runtime.show_palette(title.as_string().unwrap_or_default(), on_select);
            },
        );
        expose(&window, "showColorPicker", show_color_picker.into_js_value());

        let install_app = Closure::<dyn Fn()>::new(move || runtime.request_install());
        expose(&window, "installPWA", install_app.into_js_value());
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = runtime;
}

#[cfg(target_arch = "wasm32")]
fn expose(window: &web_sys::Window, name: &str, function: JsValue) {
    if let Err(err) = Reflect::set(window, &JsValue::from_str(name), &function) {
        logging::warn!("expose window.{name} failed: {err:?}");
    }
}
