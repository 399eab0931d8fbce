use std::cell::RefCell;

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Cache, Event, Response, Storage, Window};

thread_local! {
    static DEFERRED_INSTALL_PROMPT: RefCell<Option<Event>> = const { RefCell::new(None) };
    static INSTALL_LISTENER_ATTACHED: RefCell<bool> = const { RefCell::new(false) };
}

fn js_error(context: &str, err: JsValue) -> String {
    match err.as_string() {
        Some(message) => format!("{context}: {message}"),
        None => format!("{context}: {err:?}"),
    }
}

fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

async fn await_promise(context: &str, promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise)
        .await
        .map_err(|err| js_error(context, err))
}

async fn open_cache(cache_name: &str) -> Result<Cache, String> {
    let caches = window()?
        .caches()
        .map_err(|err| js_error("Cache API unavailable", err))?;
    await_promise("cache open failed", caches.open(cache_name))
        .await?
        .dyn_into::<Cache>()
        .map_err(|err| js_error("cache open returned a non-cache value", err))
}

async fn response_text(response: Response) -> Result<String, String> {
    let promise = response
        .text()
        .map_err(|err| js_error("response body unreadable", err))?;
    await_promise("response body read failed", promise)
        .await?
        .as_string()
        .ok_or_else(|| "response body is not text".to_string())
}

pub async fn cache_match_text(cache_name: &str, request: &str) -> Result<Option<String>, String> {
    let cache = open_cache(cache_name).await?;
    let matched = await_promise("cache match failed", cache.match_with_str(request)).await?;
    if matched.is_undefined() || matched.is_null() {
        return Ok(None);
    }
    let response = matched
        .dyn_into::<Response>()
        .map_err(|err| js_error("cache match returned a non-response value", err))?;
    response_text(response).await.map(Some)
}

pub async fn cache_put_text(cache_name: &str, request: &str, body: &str) -> Result<(), String> {
    let cache = open_cache(cache_name).await?;
    let response = Response::new_with_opt_str(Some(body))
        .map_err(|err| js_error("response construction failed", err))?;
    await_promise("cache put failed", cache.put_with_str(request, &response)).await?;
    Ok(())
}

pub async fn fetch_text(request: &str) -> Result<String, String> {
    let response = await_promise("fetch failed", window()?.fetch_with_str(request))
        .await?
        .dyn_into::<Response>()
        .map_err(|err| js_error("fetch returned a non-response value", err))?;
    if !response.ok() {
        return Err(format!(
            "fetch `{request}` failed with status {}",
            response.status()
        ));
    }
    response_text(response).await
}

pub fn service_worker_supported() -> bool {
    web_sys::window()
        .map(|window| {
            Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker")).unwrap_or(false)
        })
        .unwrap_or(false)
}

pub async fn register_service_worker(script_url: &str) -> Result<(), String> {
    if !service_worker_supported() {
        return Err("service workers are not supported".to_string());
    }
    let container = window()?.navigator().service_worker();
    await_promise("service worker registration failed", container.register(script_url)).await?;
    Ok(())
}

fn session_storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

pub fn session_get(key: &str) -> Option<String> {
    session_storage()?.get_item(key).ok().flatten()
}

pub fn session_set(key: &str, value: &str) -> Result<(), String> {
    session_storage()
        .ok_or_else(|| "sessionStorage unavailable".to_string())?
        .set_item(key, value)
        .map_err(|err| js_error("sessionStorage set_item failed", err))
}

pub fn session_remove(key: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn install_prompt_listener() {
    let already_attached = INSTALL_LISTENER_ATTACHED.with(|attached| attached.replace(true));
    if already_attached {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };

    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        DEFERRED_INSTALL_PROMPT.with(|slot| *slot.borrow_mut() = Some(event));
    });
    if window
        .add_event_listener_with_callback("beforeinstallprompt", listener.as_ref().unchecked_ref())
        .is_ok()
    {
        listener.forget();
    }
}

pub fn install_prompt_pending() -> bool {
    DEFERRED_INSTALL_PROMPT.with(|slot| slot.borrow().is_some())
}

pub async fn install_prompt_show() -> Result<bool, String> {
    let event = DEFERRED_INSTALL_PROMPT
        .with(|slot| slot.borrow_mut().take())
        .ok_or_else(|| "install prompt unavailable".to_string())?;

    let prompt = Reflect::get(&event, &JsValue::from_str("prompt"))
        .map_err(|err| js_error("install prompt lookup failed", err))?
        .dyn_into::<Function>()
        .map_err(|err| js_error("install prompt is not callable", err))?;
    prompt
        .call0(&event)
        .map_err(|err| js_error("install prompt failed", err))?;

    let choice = Reflect::get(&event, &JsValue::from_str("userChoice"))
        .map_err(|err| js_error("install choice lookup failed", err))?
        .dyn_into::<Promise>()
        .map_err(|err| js_error("install choice is not a promise", err))?;
    let choice = await_promise("install choice failed", choice).await?;
    let outcome = Reflect::get(&choice, &JsValue::from_str("outcome"))
        .map_err(|err| js_error("install outcome lookup failed", err))?;

    Ok(outcome.as_string().as_deref() == Some("accepted"))
}
