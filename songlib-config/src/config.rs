use crate::{endpoint::Endpoint, error::ConfigError};
use log::debug;
use serde::Serialize;
use strum::IntoEnumIterator;
use url::Url;

/// The process-wide configuration. Code that needs to talk to the backend should read this (or
/// call [`app_config`]) rather than building its own [`AppConfig`].
pub static APP_CONFIG: AppConfig = AppConfig::DEFAULT;

/// Returns a reference to [`APP_CONFIG`]. Every call returns the same reference.
#[must_use]
pub fn app_config() -> &'static AppConfig {
    &APP_CONFIG
}

/// The backend's base URL plus the path of each of its endpoints.
///
/// All fields are private and there is no way to get a mutable reference to [`APP_CONFIG`], so
/// the values never change once the program is running. `AppConfig` is `Copy`; changing a copy has
/// no effect on the shared value.
///
/// This serializes to the object layout browser scripts expect, with `API_BASE_URL` and
/// `ENDPOINTS` keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[allow(clippy::module_name_repetitions)]
pub struct AppConfig {
    #[serde(rename = "API_BASE_URL")]
    api_base_url: &'static str,
    #[serde(rename = "ENDPOINTS")]
    endpoints: Endpoints,
}

/// The path for each [`Endpoint`]. Every path starts with `/` and has no trailing `/`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Endpoints {
    upload: &'static str,
    list_folders: &'static str,
    folder_exists: &'static str,
    // This is the same path as `list_folders`. Callers tell them apart by how they make the
    // request, not by the path.
    folder_contents: &'static str,
}

impl AppConfig {
    /// The local development server.
    pub const DEFAULT: AppConfig = AppConfig {
        api_base_url: "http://127.0.0.1:5000",
        endpoints: Endpoints {
            upload: "/api/upload",
            list_folders: "/api/folders",
            folder_exists: "/api/folder-exists",
            folder_contents: "/api/folders",
        },
    };

    /// The base URL exactly as configured, without a trailing `/`.
    #[must_use]
    pub fn api_base_url(&self) -> &'static str {
        self.api_base_url
    }

    /// The path of each endpoint.
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns the request URL for an endpoint by appending its path to the base URL as-is.
    #[must_use]
    pub fn request_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base_url, self.endpoints.get(endpoint))
    }

    /// Parses the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Url`] if the base URL cannot be parsed.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(self.api_base_url).map_err(|source| ConfigError::Url {
            base: self.api_base_url.to_string(),
            path: String::new(),
            source,
        })
    }

    /// Returns the same URL as [`AppConfig::request_url`], parsed as a [`Url`]. Any path on the
    /// base URL is kept in front of the endpoint's path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Url`] if the combined URL cannot be parsed.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, ConfigError> {
        let url =
            Url::parse(&self.request_url(endpoint)).map_err(|source| ConfigError::Url {
                base: self.api_base_url.to_string(),
                path: self.endpoints.get(endpoint).to_string(),
                source,
            })?;
        debug!("Resolved the {endpoint} endpoint to `{url}`");
        Ok(url)
    }

    /// Like [`AppConfig::endpoint_url`], but takes the endpoint's logical name, like `UPLOAD`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEndpoint`] for an unknown name, or [`ConfigError::Url`] as
    /// described for [`AppConfig::endpoint_url`].
    pub fn url_for(&self, name: &str) -> Result<Url, ConfigError> {
        self.endpoint_url(Endpoint::from_name(name)?)
    }

    /// Renders the config as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::DEFAULT
    }
}

impl Endpoints {
    /// Returns the path for `endpoint`.
    #[must_use]
    pub fn get(&self, endpoint: Endpoint) -> &'static str {
        match endpoint {
            Endpoint::Upload => self.upload,
            Endpoint::ListFolders => self.list_folders,
            Endpoint::FolderExists => self.folder_exists,
            Endpoint::FolderContents => self.folder_contents,
        }
    }

    /// Iterates over every endpoint and its path, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Endpoint, &'static str)> + '_ {
        Endpoint::iter().map(|e| (e, self.get(e)))
    }

    /// The number of endpoints. This is always the number of [`Endpoint`] variants.
    #[must_use]
    pub fn len(&self) -> usize {
        Endpoint::iter().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `name` is the logical name of one of the endpoints.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        Endpoint::from_name(name).is_ok()
    }
}
