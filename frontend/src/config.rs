use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const API_BASE_URL_ENV: &str = "HRMS_API_BASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    API_BASE_URL.get_or_init(|| value).clone()
}

fn build_time_base_url() -> Option<String> {
    non_blank(option_env!("HRMS_API_BASE_URL").map(str::to_string))
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{anyhow, Context};
    use wasm_bindgen::JsValue;

    fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&any, &JsValue::from_str(key)).ok())
            .find(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    }

    // env.js sets window.__HRMS_ENV = { API_BASE_URL: "..." }
    pub fn from_env_js() -> Option<String> {
        read_global_key("__HRMS_ENV", &["API_BASE_URL", "api_base_url"])
    }

    pub fn from_window_config() -> Option<String> {
        read_global_key("__HRMS_CONFIG", &["api_base_url", "API_BASE_URL"])
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let Some(url) = &cfg.api_base_url else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        let _ = js_sys::Reflect::set(&window, &"__HRMS_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let origin = web_sys::window()
            .ok_or_else(|| anyhow!("no global window"))?
            .location()
            .origin()
            .map_err(|_| anyhow!("window origin unavailable"))?;
        let resp = reqwest::Client::new()
            .get(format!("{}/config.json", origin))
            .send()
            .await
            .context("fetching config.json")?;
        if !resp.status().is_success() {
            return Err(anyhow!("config.json returned {}", resp.status()));
        }
        resp.json::<RuntimeConfig>()
            .await
            .context("parsing config.json")
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let from_globals =
        non_blank(browser::from_env_js()).or_else(|| non_blank(browser::from_window_config()));
    if let Some(existing) = from_globals.or_else(build_time_base_url) {
        return cache_base_url(&existing);
    }
    match browser::fetch_runtime_config().await {
        Ok(cfg) => {
            browser::write_window_config(&cfg);
            if let Some(url) = non_blank(cfg.api_base_url) {
                return cache_base_url(&url);
            }
        }
        Err(err) => log::debug!("runtime config unavailable: {:#}", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let resolved = non_blank(std::env::var(API_BASE_URL_ENV).ok())
        .or_else(build_time_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    cache_base_url(&resolved)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {}", url);
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn env_js_global_takes_precedence() {
        let window = web_sys::window().unwrap();
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"API_BASE_URL".into(), &"https://env.example/api".into())
            .unwrap();
        js_sys::Reflect::set(&window, &"__HRMS_ENV".into(), &env).unwrap();
        assert_eq!(
            browser::from_env_js().as_deref(),
            Some("https://env.example/api")
        );
    }
}
