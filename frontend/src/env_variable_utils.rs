use crate::config::DEFAULT_API_BASE_URL;
use web_sys::window;

/// Reads `key` from the `window.ENV_CONFIG` object injected by `env-config.js`.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - runtime configuration not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;
    if value.is_undefined() {
        log::debug!("Configuration key '{key}' is not set");
        return None;
    }
    value.as_string()
}

pub fn get_youtube_api_key() -> Option<String> {
    get_env_var("YOUTUBE_API_KEY").filter(|key| !key.trim().is_empty())
}

pub fn get_api_base_url() -> String {
    get_env_var("YOUTUBE_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "Clipverse".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
