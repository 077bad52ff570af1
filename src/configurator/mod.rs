//! Preparation of a font run: fontcustom config and manifest markers

pub mod fontcustom;
pub mod fonts;
pub mod license;
pub mod markers;

pub use fontcustom::{render_font_config, write_font_config};
pub use fonts::{count_svg_icons, discover_fonts, select_font};
pub use license::validate_license;
pub use markers::{apply_markers, patch_markers, prepare_patch, read_markers, MarkerStatus};
