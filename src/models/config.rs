use std::path::{Path, PathBuf};

/// File name of the font manifest under the project root
pub const MANIFEST_FILE: &str = "font_manifest.toml";

/// Configuration shared by the configurator and the generator
#[derive(Clone, Debug)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Directory holding `icons/`, `config/`, `compiled_fonts/` and the manifest
    pub root: PathBuf,
}

impl Config {
    /// Create a new configuration rooted at `root`
    pub fn new(debug_mode: bool, root: impl Into<PathBuf>) -> Self {
        Self {
            debug_mode,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `icons/`, one subdirectory of SVG files per font
    pub fn icons_dir(&self) -> PathBuf {
        self.root.join("icons")
    }

    pub fn font_icons_dir(&self, font_name: &str) -> PathBuf {
        self.icons_dir().join(font_name)
    }

    /// `config/fontcustom.yml`
    pub fn fontcustom_config_path(&self) -> PathBuf {
        self.root.join("config").join("fontcustom.yml")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn compiled_dir(&self, font_name: &str) -> PathBuf {
        self.root.join("compiled_fonts").join(font_name)
    }

    /// CSS produced by the font compiler
    pub fn css_path(&self, font_name: &str) -> PathBuf {
        self.compiled_dir(font_name).join(format!("{}.css", font_name))
    }

    /// TTF produced by the font compiler
    pub fn ttf_path(&self, font_name: &str) -> PathBuf {
        self.compiled_dir(font_name).join(format!("{}.ttf", font_name))
    }

    /// `nanogui/<font>/`, where the generated artifacts land
    pub fn output_dir(&self, font_name: &str) -> PathBuf {
        self.root.join("nanogui").join(font_name)
    }
}
