use crate::{config::AppConfig, error::ConfigError};
use log::debug;

/// The name of the `window` property the config is published under by default.
pub const DEFAULT_BINDING: &str = "appConfig";

/// Renders a script that publishes `config` as `window.<binding>`, for pages where scripts share
/// the config through the global namespace instead of importing it. The script must run before
/// any script that reads the binding.
///
/// Both the published object and its `ENDPOINTS` object are frozen.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBindingName`] if `binding` is not a JavaScript identifier.
pub fn render_global_script(config: &AppConfig, binding: &str) -> Result<String, ConfigError> {
    if !is_js_identifier(binding) {
        return Err(ConfigError::InvalidBindingName(binding.to_string()));
    }

    let endpoints = config
        .endpoints()
        .iter()
        .map(|(e, path)| -> Result<String, serde_json::Error> {
            Ok(format!(
                "        {}: {}",
                serde_json::to_string(e.as_ref())?,
                serde_json::to_string(path)?,
            ))
        })
        .collect::<Result<Vec<_>, _>>()?
        .join(",\n");

    debug!("Rendering config script for `window.{binding}`");
    Ok(format!(
        "// API Configuration\nwindow.{binding} = Object.freeze({{\n    \"API_BASE_URL\": {},\n    \"ENDPOINTS\": Object.freeze({{\n{endpoints}\n    }})\n}});\n",
        serde_json::to_string(config.api_base_url())?,
    ))
}

// This only accepts ASCII identifiers. Reserved words are not rejected, but `window.<name>` is
// still valid for those.
fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
