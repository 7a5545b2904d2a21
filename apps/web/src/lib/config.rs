//! Build-time configuration with an optional runtime override read from
//! `window.BEVPACK_CONFIG`, so a static deployment can point at another API
//! without rebuilding.

/// Frontend configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// API origin; empty means same origin as the page.
    pub api_base_url: String,
    /// Company inbox shown on the contact page.
    pub contact_email: String,
}

impl AppConfig {
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("BEVPACK_API_BASE_URL")
                .unwrap_or("")
                .to_string(),
            contact_email: option_env!("BEVPACK_CONTACT_EMAIL")
                .unwrap_or("sales@bevpack.dev")
                .to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Joins `path` onto the API base, or returns it unchanged for same-origin calls.
    pub fn url(&self, path: &str) -> String {
        let base = self.api_base_url.trim().trim_end_matches('/');
        let path = path.trim();

        if base.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    contact_email: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.contact_email {
        config.contact_email = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("BEVPACK_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        contact_email: read_runtime_value(&object, "contact_email"),
    })
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_runtime_overrides, normalize_runtime_value, AppConfig, RuntimeConfig};

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.bevpack.dev".to_string(),
            contact_email: "sales@bevpack.dev".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.bevpack.dev "),
            Some("https://api.bevpack.dev".to_string())
        );
    }

    #[test]
    fn empty_overrides_keep_defaults() {
        let mut config = defaults();
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                api_base_url: normalize_runtime_value(" "),
                contact_email: normalize_runtime_value(""),
            },
        );
        assert_eq!(config, defaults());
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut config = defaults();
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                api_base_url: normalize_runtime_value("http://localhost:8080"),
                contact_email: None,
            },
        );
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.contact_email, "sales@bevpack.dev");
    }

    #[test]
    fn url_joins_without_double_slashes() {
        let config = AppConfig {
            api_base_url: "http://localhost:8080/".to_string(),
            ..defaults()
        };
        assert_eq!(
            config.url("/v1/catalog/categories"),
            "http://localhost:8080/v1/catalog/categories"
        );
    }

    #[test]
    fn url_is_relative_without_base() {
        let config = AppConfig {
            api_base_url: String::new(),
            ..defaults()
        };
        assert_eq!(config.url("/v1/catalog/products"), "/v1/catalog/products");
    }
}
