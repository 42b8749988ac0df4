//! Error types for the layers around the engine.
//!
//! The engine itself is infallible once a [`TouchDevice`](crate::device::TouchDevice)
//! exists; these errors come from configuration, device lookup and feature I/O.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML device table: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON device table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no device class for {vendor_id:04x}:{product_id:04x}")]
    UnknownDevice { vendor_id: u16, product_id: u16 },

    #[error("device already attached: {0}")]
    AlreadyAttached(String),

    #[error("device not attached: {0}")]
    NotAttached(String),

    #[error("feature report write failed: {0}")]
    FeatureWrite(String),

    #[cfg(feature = "hid")]
    #[error("hidapi error: {0}")]
    Hid(#[from] hidapi::HidError),
}
