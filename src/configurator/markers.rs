//! Patching of the three marker lines of the font manifest
//!
//! The manifest is a TOML file whose first `EXPECTED_NUM_ICONS = `,
//! `FONT_NAME = ` and `FONT_LICENSE = ` lines hold the values the generator
//! runs with. Everything else in the file is left untouched.

use std::path::Path;
use lazy_static::lazy_static;
use regex::Regex;
use crate::error::{Error, Result};
use crate::models::{Config, FontManifest};
use crate::utils::{log, read_file, write_file};

lazy_static! {
    static ref NUM_ICONS_RE: Regex = Regex::new(r"^EXPECTED_NUM_ICONS = ").unwrap();
    static ref FONT_NAME_RE: Regex = Regex::new(r"^FONT_NAME = ").unwrap();
    static ref FONT_LICENSE_RE: Regex = Regex::new(r"^FONT_LICENSE = ").unwrap();
}

/// Which markers were replaced
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStatus {
    pub num_icons: bool,
    pub font_name: bool,
    pub license: bool,
}

impl MarkerStatus {
    pub fn is_complete(&self) -> bool {
        self.num_icons && self.font_name && self.license
    }
}

/// Quote `value` as a TOML basic string
pub fn toml_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04X}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Replace the first occurrence of each marker line in `contents`
pub fn apply_markers(contents: &str, manifest: &FontManifest) -> (String, MarkerStatus) {
    let mut status = MarkerStatus::default();
    let mut lines = Vec::new();

    for line in contents.lines() {
        if status.is_complete() {
            lines.push(line.to_string());
        } else if !status.num_icons && NUM_ICONS_RE.is_match(line) {
            lines.push(format!("EXPECTED_NUM_ICONS = {}", manifest.expected_icon_count));
            status.num_icons = true;
        } else if !status.font_name && FONT_NAME_RE.is_match(line) {
            lines.push(format!("FONT_NAME = {}", toml_string(&manifest.font_name)));
            status.font_name = true;
        } else if !status.license && FONT_LICENSE_RE.is_match(line) {
            lines.push(format!("FONT_LICENSE = {}", toml_string(&manifest.license)));
            status.license = true;
        } else {
            lines.push(line.to_string());
        }
    }

    let mut patched = lines.join("\n");
    patched.push('\n');
    (patched, status)
}

/// Compute the patched manifest text without writing it
///
/// Fails when any of the three markers is missing from the file at `path`.
pub fn prepare_patch(path: &Path, manifest: &FontManifest) -> Result<String> {
    if !path.is_file() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }
    let contents = read_file(path)?;
    let (patched, status) = apply_markers(&contents, manifest);
    if !status.is_complete() {
        return Err(Error::MarkersNotPatched {
            path: path.to_path_buf(),
            num_icons: status.num_icons,
            font_name: status.font_name,
            license: status.license,
        });
    }
    Ok(patched)
}

/// Rewrite the marker lines of the manifest at `path`
pub fn patch_markers(path: &Path, manifest: &FontManifest, config: &Config) -> Result<()> {
    let patched = prepare_patch(path, manifest)?;
    log(config, format!("Patching markers in {}", path.display()));
    write_file(path, &patched, config)
}

/// Read the marker values back from the manifest at `path`
pub fn read_markers(path: &Path) -> Result<FontManifest> {
    FontManifest::load(path)
}
