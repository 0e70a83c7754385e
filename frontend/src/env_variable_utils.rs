use lazy_static::lazy_static;
use web_sys::window;

lazy_static! {
    pub static ref GRAPHQL_URL: String = get_graphql_url();
    pub static ref MEDIA_BASE_URL: String = get_media_base_url();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_graphql_url() -> String {
    get_env_var("GRAPHQL_URL").unwrap_or_else(|| "https://query.joystream.org/graphql".to_string())
}

pub fn get_media_base_url() -> String {
    get_env_var("MEDIA_BASE_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| "https://assets.joyutils.org".to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "Joystream Shorts".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
