pub mod file;
pub mod naming;
pub mod logging;

pub use file::{ensure_directory_exists, read_file, write_file};
pub use naming::{capitalize, is_valid_font_name, validate_font_name};
pub use logging::log;
