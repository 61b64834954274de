use thiserror::Error;

/// The errors that can be returned by this crate.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ConfigError {
    #[error("unknown endpoint name `{name}`, expected one of {valid}")]
    UnknownEndpoint { name: String, valid: String },
    #[error("could not build a URL from `{base}` and `{path}`: {source}")]
    Url {
        base: String,
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("`{0}` is not a valid JavaScript identifier")]
    InvalidBindingName(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
