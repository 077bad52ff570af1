use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::error::{Error, Result};

/// Font name, license and icon count describing one generation run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontManifest {
    #[serde(rename = "FONT_NAME")]
    pub font_name: String,
    #[serde(rename = "FONT_LICENSE")]
    pub license: String,
    #[serde(rename = "EXPECTED_NUM_ICONS")]
    pub expected_icon_count: usize,
}

impl FontManifest {
    pub fn new(font_name: &str, license: &str, expected_icon_count: usize) -> Self {
        Self {
            font_name: font_name.to_string(),
            license: license.to_string(),
            expected_icon_count,
        }
    }

    /// Parse manifest text
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse the manifest at `path`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingFile(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}
