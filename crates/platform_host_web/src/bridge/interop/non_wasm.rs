fn unsupported() -> String {
    "Browser APIs are only available when compiled for wasm32".to_string()
}

pub async fn cache_match_text(_cache_name: &str, _request: &str) -> Result<Option<String>, String> {
    Ok(None)
}

pub async fn cache_put_text(_cache_name: &str, _request: &str, _body: &str) -> Result<(), String> {
    Ok(())
}

pub async fn fetch_text(_request: &str) -> Result<String, String> {
    Err(unsupported())
}

pub fn service_worker_supported() -> bool {
    false
}

pub async fn register_service_worker(_script_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn session_get(_key: &str) -> Option<String> {
    None
}

pub fn session_set(_key: &str, _value: &str) -> Result<(), String> {
    Ok(())
}

pub fn session_remove(_key: &str) {}

pub fn install_prompt_listener() {}

pub fn install_prompt_pending() -> bool {
    false
}

pub async fn install_prompt_show() -> Result<bool, String> {
    Err(unsupported())
}
