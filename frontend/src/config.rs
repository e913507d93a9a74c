use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_ACCOUNTS_URL: &str = "./accounts.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub accounts_url: Option<String>,
}

static ACCOUNTS_URL: OnceLock<String> = OnceLock::new();

/// Precedence: `window.__TIENDA_ENV`, then `window.__TIENDA_CONFIG`, then
/// `./config.json`, then the bundled default.
pub fn resolve_accounts_url(
    from_env_js: Option<String>,
    from_window_config: Option<String>,
    fetched: Option<RuntimeConfig>,
) -> String {
    from_env_js
        .or(from_window_config)
        .or_else(|| fetched.and_then(|cfg| cfg.accounts_url))
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_ACCOUNTS_URL.to_string())
}

fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn get_from_env_js() -> Option<String> {
    // window.__TIENDA_ENV = { ACCOUNTS_URL: "..." } (env.js)
    read_global("__TIENDA_ENV", ["ACCOUNTS_URL", "accounts_url"])
}

fn get_from_window_config() -> Option<String> {
    read_global("__TIENDA_CONFIG", ["accounts_url", "ACCOUNTS_URL"])
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get(absolute_url("./config.json")?).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json unavailable ({})", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// reqwest needs absolute URLs; relative ones are resolved against the page.
pub fn absolute_url(url: &str) -> Option<String> {
    if url.contains("://") {
        return Some(url.to_string());
    }
    let base = web_sys::window()?.location().href().ok()?;
    web_sys::Url::new_with_base(url, &base)
        .ok()
        .map(|resolved| resolved.href())
}

pub async fn await_accounts_url() -> String {
    if let Some(cached) = ACCOUNTS_URL.get() {
        return cached.clone();
    }
    let env_url = get_from_env_js();
    let window_url = get_from_window_config();
    let fetched = if env_url.is_none() && window_url.is_none() {
        fetch_runtime_config().await
    } else {
        None
    };
    let url = resolve_accounts_url(env_url, window_url, fetched);
    let url = absolute_url(&url).unwrap_or(url);
    log::info!("accounts directory url: {}", url);
    ACCOUNTS_URL.get_or_init(|| url).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_js_takes_precedence() {
        let url = resolve_accounts_url(
            Some("https://cdn.tienda.cl/accounts.json".into()),
            Some("/ignored.json".into()),
            Some(RuntimeConfig {
                accounts_url: Some("/also-ignored.json".into()),
            }),
        );
        assert_eq!(url, "https://cdn.tienda.cl/accounts.json");
    }

    #[test]
    fn falls_back_through_window_config_and_fetched_file() {
        assert_eq!(
            resolve_accounts_url(None, Some("/win.json".into()), None),
            "/win.json"
        );
        assert_eq!(
            resolve_accounts_url(
                None,
                None,
                Some(RuntimeConfig {
                    accounts_url: Some(" /file.json ".into()),
                }),
            ),
            "/file.json"
        );
    }

    #[test]
    fn blank_or_missing_values_use_default() {
        assert_eq!(resolve_accounts_url(None, None, None), DEFAULT_ACCOUNTS_URL);
        assert_eq!(
            resolve_accounts_url(Some("  ".into()), None, None),
            DEFAULT_ACCOUNTS_URL
        );
        assert_eq!(
            resolve_accounts_url(None, None, Some(RuntimeConfig::default())),
            DEFAULT_ACCOUNTS_URL
        );
    }

    #[test]
    fn runtime_config_reads_json_file_shape() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"accounts_url":"/cuentas.json"}"#).unwrap();
        assert_eq!(cfg.accounts_url.as_deref(), Some("/cuentas.json"));
        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.accounts_url.is_none());
    }
}
