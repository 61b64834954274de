//! Connection settings for the song library's backend API.
//!
//! The backend is reached through a base URL and a fixed set of named endpoints. This crate holds
//! those values in one place, as the process-wide [`APP_CONFIG`]:
//!
//! ```
//! use songlib_config::{app_config, Endpoint};
//!
//! let config = app_config();
//! assert_eq!(config.api_base_url(), "http://127.0.0.1:5000");
//! assert_eq!(
//!     config.request_url(Endpoint::Upload),
//!     "http://127.0.0.1:5000/api/upload",
//! );
//! ```
//!
//! ## Endpoints
//!
//! | Name              | Path                 | Method |
//! |-------------------|----------------------|--------|
//! | `UPLOAD`          | `/api/upload`        | `POST` |
//! | `LIST_FOLDERS`    | `/api/folders`       | `GET`  |
//! | `FOLDER_EXISTS`   | `/api/folder-exists` | `GET`  |
//! | `FOLDER_CONTENTS` | `/api/folders`       | `GET`  |
//!
//! `LIST_FOLDERS` and `FOLDER_CONTENTS` have the same path. They are kept as separate names
//! because the front end uses them for different things.
//!
//! ## Browser Scripts
//!
//! Pages that load their scripts with plain `<script>` tags can't import this crate's values. For
//! those, [`render_global_script`] generates a script that assigns a frozen copy of the config to
//! `window.appConfig`. That script has to be loaded before the scripts that read it.
//!
//! ## Features
//!
#![doc = document_features::document_features!()]

mod config;
mod endpoint;
mod error;
mod global;

pub use crate::{
    config::{app_config, AppConfig, Endpoints, APP_CONFIG},
    endpoint::{Endpoint, Method},
    error::ConfigError,
    global::{render_global_script, DEFAULT_BINDING},
};

// The version of the `songlib-config` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "logging")]
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};

/// This function initializes logging for the application. It's public for the sake of the
/// `songlib-config` binary, but it lives in the library crate so that test code can also enable
/// logging.
///
/// # Errors
///
/// This can return a `log::SetLoggerError` error.
#[cfg(feature = "logging")]
pub fn init_logger(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    let line_colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::BrightBlack)
        .debug(Color::BrightBlack)
        .trace(Color::BrightBlack);
    let level_colors = line_colors.info(Color::Green).debug(Color::Black);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{color_line}[{target}][{level}{color_line}] {message}\x1B[0m",
                color_line = format_args!(
                    "\x1B[{}m",
                    line_colors.get_color(&record.level()).to_fg_str()
                ),
                target = record.target(),
                level = level_colors.color(record.level()),
                message = message,
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}
