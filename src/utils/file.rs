use std::fs;
use std::path::Path;
use crate::error::{Error, Result};
use crate::models::Config;
use crate::utils::logging::log;

fn file_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::File {
        path: path.to_path_buf(),
        source,
    }
}

/// Create a directory if it doesn't exist
pub fn ensure_directory_exists(dir: &Path, config: &Config) -> Result<()> {
    if !dir.is_dir() {
        log(
            config,
            format!("Directory {} does not exist. Creating it now.", dir.display()),
        );
        fs::create_dir_all(dir).map_err(file_error(dir))?;
    }
    Ok(())
}

/// Read a whole UTF-8 file
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(file_error(path))
}

/// Write `contents` to `path`, replacing whatever was there
pub fn write_file(path: &Path, contents: &str, config: &Config) -> Result<()> {
    log(config, format!("Writing {} bytes to {}", contents.len(), path.display()));
    fs::write(path, contents).map_err(file_error(path))
}
