//! Icon font tooling for NanoGUI
//!
//! The configurator prepares a font run (fontcustom configuration and the
//! font manifest), the generator turns the compiled CSS into a C header,
//! Python binding stub and two example programs.

pub mod cli;
pub mod configurator;
pub mod error;
pub mod generator;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
