use std::path::PathBuf;
use clap::Parser;
use crate::models::Config;

/// Prepare an icon font: write config/fontcustom.yml and patch the font manifest
#[derive(Parser, Debug)]
#[command(name = "iconfont-manufacture", version, about)]
pub struct ManufactureArgs {
    /// The font to manufacture (a subdirectory of <ROOT>/icons)
    pub font_name: String,

    /// License text including a URL; asked for interactively when omitted
    #[arg(long)]
    pub license: Option<String>,

    /// Project directory holding icons/, config/ and the font manifest
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

/// Generate the NanoGUI header, Python bindings and examples from the compiled CSS
#[derive(Parser, Debug)]
#[command(name = "iconfont-generate", version, about)]
pub struct GenerateArgs {
    /// Project directory holding the font manifest and compiled_fonts/
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Check that the compiled TTF has a glyph for every icon
    #[arg(long)]
    pub verify_font: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl ManufactureArgs {
    pub fn config(&self) -> Config {
        Config::new(self.debug, &self.root)
    }
}

impl GenerateArgs {
    pub fn config(&self) -> Config {
        Config::new(self.debug, &self.root)
    }
}
