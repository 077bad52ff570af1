//! Data types shared by the configurator and the generator

pub mod config;
pub mod icon;
pub mod manifest;

pub use config::{Config, MANIFEST_FILE};
pub use icon::{icon_symbol, IconRecord};
pub use manifest::FontManifest;
