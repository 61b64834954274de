use crate::{config::APP_CONFIG, error::ConfigError};
use itertools::Itertools;
use std::str::FromStr;
use strum::VariantNames;

/// The logical names of the backend's REST endpoints. The string form of each variant (`UPLOAD`,
/// `LIST_FOLDERS`, etc.) is the name front-end code uses to look the path up.
#[derive(
    strum::AsRefStr,
    Clone,
    Copy,
    Debug,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    Eq,
    Hash,
    PartialEq,
    strum::VariantNames,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Endpoint {
    Upload,
    ListFolders,
    FolderExists,
    FolderContents,
}

/// The HTTP method a consumer should use for an endpoint.
#[derive(strum::AsRefStr, Clone, Copy, Debug, strum::Display, Eq, PartialEq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Endpoint {
    /// Looks up an endpoint by its logical name, like `FOLDER_EXISTS`. Names are case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEndpoint`] if the name is not one of [`Endpoint::VARIANTS`].
    pub fn from_name(name: &str) -> Result<Endpoint, ConfigError> {
        Endpoint::from_str(name).map_err(|_| ConfigError::UnknownEndpoint {
            name: name.to_string(),
            valid: Endpoint::VARIANTS.iter().join(", "),
        })
    }

    /// The path for this endpoint in the process-wide [`APP_CONFIG`](crate::APP_CONFIG).
    #[must_use]
    pub fn path(self) -> &'static str {
        APP_CONFIG.endpoints().get(self)
    }

    /// `LIST_FOLDERS` and `FOLDER_CONTENTS` share a path, so the path alone doesn't say what a
    /// request does. This is the method the backend serves each endpoint with.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Endpoint::Upload => Method::Post,
            Endpoint::ListFolders | Endpoint::FolderExists | Endpoint::FolderContents => {
                Method::Get
            }
        }
    }
}
