//! Generation of the NanoGUI artifacts from a compiled icon font

pub mod bindings;
pub mod css;
pub mod examples;
pub mod header;
pub mod verify;

use std::fs;
use std::path::{Path, PathBuf};
use crate::error::{Error, Result};
use crate::models::{Config, FontManifest, IconRecord};
use crate::utils::{ensure_directory_exists, log, read_file, validate_font_name, write_file};

pub use bindings::render_binding_stub;
pub use css::{check_icon_count, parse_icon_table};
pub use examples::{render_cpp_example, render_python_example};
pub use header::render_header;
pub use verify::verify_font;

/// One generated file, rendered but not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
}

/// Options of a generator run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Check the compiled TTF has a glyph for every icon
    pub verify_font: bool,
}

/// What a successful run produced
#[derive(Debug)]
pub struct GenerationReport {
    pub font_name: String,
    pub icon_count: usize,
    pub written: Vec<PathBuf>,
}

/// Render the header, binding stub and both example programs, in that order
pub fn render_artifacts(records: &[IconRecord], manifest: &FontManifest) -> Vec<Artifact> {
    let name = manifest.font_name.as_str();
    vec![
        Artifact {
            file_name: format!("{}.h", name),
            contents: render_header(records, name, &manifest.license),
        },
        Artifact {
            file_name: format!("constants_{}.cpp", name),
            contents: render_binding_stub(records, name, &manifest.license),
        },
        Artifact {
            file_name: format!("example_{}.cpp", name),
            contents: render_cpp_example(records, name),
        },
        Artifact {
            file_name: format!("example_{}.py", name),
            contents: render_python_example(records, name),
        },
    ]
}

/// Write `artifacts` into `dir`, creating it when missing
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact], config: &Config) -> Result<Vec<PathBuf>> {
    ensure_directory_exists(dir, config)?;
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(&artifact.file_name);
        write_file(&path, &artifact.contents, config)?;
        written.push(path);
    }
    Ok(written)
}

/// Run the whole pipeline for the font described by `manifest`
///
/// Nothing is written unless parsing, the count check and the optional font
/// verification all succeed.
pub fn generate_with_manifest(
    manifest: &FontManifest,
    config: &Config,
    options: GenerateOptions,
) -> Result<GenerationReport> {
    validate_font_name(&manifest.font_name)?;
    let font_name = manifest.font_name.as_str();

    let css_path = config.css_path(font_name);
    if !css_path.is_file() {
        return Err(Error::MissingCompiledFile(css_path));
    }
    log(config, format!("Parsing {}", css_path.display()));
    let records = parse_icon_table(&read_file(&css_path)?, font_name)?;
    check_icon_count(&records, manifest.expected_icon_count)?;

    if options.verify_font {
        let ttf_path = config.ttf_path(font_name);
        if !ttf_path.is_file() {
            return Err(Error::MissingCompiledFile(ttf_path));
        }
        let data = fs::read(&ttf_path).map_err(|source| Error::File {
            path: ttf_path.clone(),
            source,
        })?;
        verify_font(&records, &data)?;
        log(config, format!("Every icon has a glyph in {}", ttf_path.display()));
    }

    let artifacts = render_artifacts(&records, manifest);
    let written = write_artifacts(&config.output_dir(font_name), &artifacts, config)?;

    Ok(GenerationReport {
        font_name: font_name.to_string(),
        icon_count: records.len(),
        written,
    })
}

/// Load the manifest under the project root and run the pipeline
pub fn generate(config: &Config, options: GenerateOptions) -> Result<GenerationReport> {
    let manifest = FontManifest::load(&config.manifest_path())?;
    log(
        config,
        format!(
            "Manifest: font {}, {} icons expected",
            manifest.font_name, manifest.expected_icon_count
        ),
    );
    generate_with_manifest(&manifest, config, options)
}
