//! Command-line interface handling and user interaction

mod args;
mod interaction;

pub use args::{GenerateArgs, ManufactureArgs};
pub use interaction::{get_license, prompt_license};

use crate::configurator::{
    count_svg_icons, discover_fonts, prepare_patch, select_font, validate_license,
    write_font_config,
};
use crate::error::{Error, Result};
use crate::generator::{generate, GenerateOptions};
use crate::models::FontManifest;
use crate::utils::{log, validate_font_name, write_file};

/// Prepare the font selected by `args`
pub fn run_manufacture(args: ManufactureArgs) -> Result<()> {
    let config = args.config();
    if !config.root().is_dir() {
        return Err(Error::InvalidPath(config.root.clone()));
    }

    let fonts = discover_fonts(&config.icons_dir(), &config)?;
    validate_font_name(&args.font_name)?;
    select_font(&args.font_name, &fonts)?;

    let font_dir = config.font_icons_dir(&args.font_name);
    let num_icons = count_svg_icons(&font_dir)?;
    println!(">>> Found {} icons in {}.", num_icons, font_dir.display());

    let license = get_license(&args.font_name, args.license.clone())?;
    validate_license(&license)?;

    // markers are checked before either file is touched
    let manifest = FontManifest::new(&args.font_name, &license, num_icons);
    let manifest_path = config.manifest_path();
    let patched = prepare_patch(&manifest_path, &manifest)?;

    let yml_path = config.fontcustom_config_path();
    println!(">>> Updating {}.", yml_path.display());
    write_font_config(&yml_path, &args.font_name, &config)?;

    println!(">>> Updating {}.", manifest_path.display());
    log(&config, format!("Manifest values: {:?}", manifest));
    write_file(&manifest_path, &patched, &config)?;

    println!(
        "Done!\n\n\
         First, compile the font (e.g. run 'rake') in {}.\n\n\
         Then, run 'iconfont-generate'.",
        config.root().display()
    );
    Ok(())
}

/// Generate the artifacts for the font recorded in the manifest
pub fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = args.config();
    if !config.root().is_dir() {
        return Err(Error::InvalidPath(config.root.clone()));
    }

    let options = GenerateOptions {
        verify_font: args.verify_font,
    };
    let report = generate(&config, options)?;

    println!("Found exactly [{}] icons, as expected.", report.icon_count);
    for path in &report.written {
        log(&config, format!("Wrote {}", path.display()));
    }
    println!(
        "Generated {} files for the {} font in {}.",
        report.written.len(),
        report.font_name,
        config.output_dir(&report.font_name).display()
    );
    Ok(())
}
