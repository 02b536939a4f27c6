//! Form configuration from build-time environment variables with an optional
//! runtime override. The runtime config is read from `window.GERBANG_CONFIG`
//! (if present) so static deployments can change delays and navigation
//! targets without rebuilding. Configuration values are public.

use crate::app_lib::AppError;
use auth_forms::{FormsConfig, config::ConfigOverrides};
use tracing::warn;

/// Loads config from build-time environment variables and applies runtime overrides.
pub fn load() -> FormsConfig {
    let mut config = FormsConfig::default();
    config.apply(build_time_overrides());

    match runtime_overrides() {
        Ok(Some(runtime)) => config.apply(runtime),
        Ok(None) => {}
        Err(err) => warn!("Ignoring runtime config: {err}"),
    }

    config
}

fn build_time_overrides() -> ConfigOverrides {
    ConfigOverrides {
        sign_in_delay_ms: parse_number(option_env!("GERBANG_SIGN_IN_DELAY_MS")),
        register_delay_ms: parse_number(option_env!("GERBANG_REGISTER_DELAY_MS")),
        social_delay_ms: parse_number(option_env!("GERBANG_SOCIAL_DELAY_MS")),
        landing_path: option_env!("GERBANG_LANDING_PATH").map(str::to_string),
        sign_in_path: option_env!("GERBANG_SIGN_IN_PATH").map(str::to_string),
        fail_submissions: option_env!("GERBANG_FAIL_SUBMISSIONS").and_then(parse_flag),
    }
}

fn parse_number(value: Option<&str>) -> Option<u32> {
    value.and_then(|raw| raw.trim().parse().ok())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn runtime_overrides() -> Result<Option<ConfigOverrides>, AppError> {
    use js_sys::{JSON, Reflect};
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let config = Reflect::get(&window, &JsValue::from_str("GERBANG_CONFIG"))
        .map_err(|_| AppError::Config("window.GERBANG_CONFIG is not readable".to_string()))?;
    if config.is_null() || config.is_undefined() {
        return Ok(None);
    }

    let raw = JSON::stringify(&config)
        .map(String::from)
        .map_err(|_| AppError::Config("window.GERBANG_CONFIG is not serializable".to_string()))?;

    ConfigOverrides::from_json(&raw)
        .map(Some)
        .map_err(|err| AppError::Config(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_flag, parse_number};

    #[test]
    fn parse_number_trims_and_rejects_garbage() {
        assert_eq!(parse_number(None), None);
        assert_eq!(parse_number(Some(" 250 ")), Some(250));
        assert_eq!(parse_number(Some("soon")), None);
    }

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
