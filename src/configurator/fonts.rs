use std::fs;
use std::path::Path;
use crate::error::{Error, Result};
use crate::models::Config;
use crate::utils::{is_valid_font_name, log};

/// List the font subdirectories of `icons_dir`, sorted by name
///
/// Every subdirectory must be usable as a font name, otherwise the whole
/// listing is rejected so the user renames it before anything is generated.
pub fn discover_fonts(icons_dir: &Path, config: &Config) -> Result<Vec<String>> {
    if !icons_dir.is_dir() {
        return Err(Error::InvalidPath(icons_dir.to_path_buf()));
    }

    let mut fonts = Vec::new();
    for entry in fs::read_dir(icons_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_valid_font_name(&name) {
            return Err(Error::UnusableFontDirectory(name));
        }
        log(config, format!("Found font directory: {}", name));
        fonts.push(name);
    }

    if fonts.is_empty() {
        return Err(Error::NoFontDirectories(icons_dir.to_path_buf()));
    }
    fonts.sort();
    Ok(fonts)
}

/// Check `font_name` against the discovered candidates
pub fn select_font(font_name: &str, candidates: &[String]) -> Result<()> {
    if candidates.iter().any(|c| c == font_name) {
        Ok(())
    } else {
        Err(Error::UnknownFont {
            name: font_name.to_string(),
            candidates: candidates.to_vec(),
        })
    }
}

/// Count the `.svg` files directly inside `font_dir`
pub fn count_svg_icons(font_dir: &Path) -> Result<usize> {
    if !font_dir.is_dir() {
        return Err(Error::InvalidPath(font_dir.to_path_buf()));
    }

    let mut count = 0;
    for entry in fs::read_dir(font_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "svg") {
            count += 1;
        }
    }

    if count == 0 {
        return Err(Error::NoIcons(font_dir.to_path_buf()));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (tempfile::TempDir, Config) {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::new(false, tmp.path());
        fs::create_dir_all(config.icons_dir()).unwrap();
        (tmp, config)
    }

    #[test]
    fn lists_only_directories() {
        let (_tmp, config) = setup();
        fs::create_dir(config.font_icons_dir("zeta")).unwrap();
        fs::create_dir(config.font_icons_dir("alpha")).unwrap();
        fs::write(config.icons_dir().join("README.md"), "notes").unwrap();

        let fonts = discover_fonts(&config.icons_dir(), &config).unwrap();
        assert_eq!(fonts, vec!["alpha".to_string(), "zeta".to_string()]);
    }

    #[test]
    fn empty_icons_dir_is_rejected() {
        let (_tmp, config) = setup();
        let err = discover_fonts(&config.icons_dir(), &config).unwrap_err();
        assert!(matches!(err, Error::NoFontDirectories(_)));
    }

    #[test]
    fn unusable_directory_name_is_rejected() {
        let (_tmp, config) = setup();
        fs::create_dir(config.font_icons_dir("good")).unwrap();
        fs::create_dir(config.font_icons_dir("font-awesome")).unwrap();

        let err = discover_fonts(&config.icons_dir(), &config).unwrap_err();
        assert!(matches!(err, Error::UnusableFontDirectory(ref d) if d == "font-awesome"));
    }

    #[test]
    fn select_font_requires_a_candidate() {
        let candidates = vec!["entypo".to_string()];
        assert!(select_font("entypo", &candidates).is_ok());
        assert!(matches!(
            select_font("other", &candidates),
            Err(Error::UnknownFont { .. })
        ));
    }

    #[test]
    fn counts_svg_files_only() {
        let (_tmp, config) = setup();
        let dir = config.font_icons_dir("myfont");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("home.svg"), "<svg/>").unwrap();
        fs::write(dir.join("star.svg"), "<svg/>").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();

        assert_eq!(count_svg_icons(&dir).unwrap(), 2);
    }

    #[test]
    fn no_svg_files_is_an_error() {
        let (_tmp, config) = setup();
        let dir = config.font_icons_dir("myfont");
        fs::create_dir(&dir).unwrap();

        assert!(matches!(count_svg_icons(&dir), Err(Error::NoIcons(_))));
    }
}
