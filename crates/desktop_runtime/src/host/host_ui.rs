use leptos::{logging, spawn_local};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use platform_host::InstallOutcome;

use crate::{
    host::DesktopHostContext,
    model::{DesktopAppearance, PlacementSample, WindowRect},
    overlays::DialogKind,
    runtime_context::DesktopRuntimeContext,
};

pub(crate) const INSTALL_DIALOG_TITLE: &str = "Installation";
pub(crate) const INSTALL_UNAVAILABLE_MESSAGE: &str = "Installation is not available. You might already have the app installed, or your browser/platform does not support PWA installation.";

/// Appends `content` to the page as a module script.
pub(super) fn execute_script(content: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let script = match document.create_element("script") {
            Ok(script) => script,
            Err(err) => {
                logging::warn!("create script element failed: {err:?}");
                return;
            }
        };
        let _ = script.set_attribute("type", "module");
        script.set_text_content(Some(content));
        if let Err(err) = body.append_child(&script) {
            logging::warn!("append app script failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    logging::log!("script execution skipped off-browser ({} bytes)", content.len());
}

/// Pushes the document title and theme color into the page.
pub(super) fn apply_appearance(appearance: &DesktopAppearance) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        document.set_title(&appearance.title);
        let Some(root) = document
            .document_element()
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        if let Err(err) = root
            .style()
            .set_property("--theme-color", &appearance.theme_color)
        {
            logging::warn!("apply theme color failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = appearance;
}

pub(super) fn request_install(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let install = host.install_prompt_service();
    if !install.is_available() {
        runtime.show_dialog(
            INSTALL_DIALOG_TITLE,
            INSTALL_UNAVAILABLE_MESSAGE,
            DialogKind::Info,
            None,
        );
        return;
    }

    spawn_local(async move {
        match install.prompt().await {
            Ok(InstallOutcome::Accepted) => logging::log!("install prompt accepted"),
            Ok(InstallOutcome::Dismissed) => logging::log!("install prompt dismissed"),
            Err(err) => logging::warn!("install prompt failed: {err}"),
        }
    });
}

pub(super) fn placement_sample() -> PlacementSample {
    #[cfg(target_arch = "wasm32")]
    {
        PlacementSample::new(js_sys::Math::random(), js_sys::Math::random())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        PlacementSample::new(0.5, 0.5)
    }
}

pub(super) fn desktop_viewport_rect(taskbar_height_px: i32) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(0),
                h: (height - taskbar_height_px).max(0),
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: 1024,
        h: 768 - taskbar_height_px,
    }
}
