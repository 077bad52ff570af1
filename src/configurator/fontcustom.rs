use std::path::Path;
use crate::error::Result;
use crate::models::Config;
use crate::utils::{ensure_directory_exists, write_file};

/// Render the fontcustom configuration for `font_name`
pub fn render_font_config(font_name: &str) -> String {
    format!(
        r#"font_name: "{font}"
# The css_selector must stay exactly ".{{{{font_name}}}}-icon-{{{{glyph}}}}",
# otherwise iconfont-generate cannot parse the generated css file.
css_selector: ".{font}-icon-{{{{glyph}}}}"
preprocessor_path: ""
# autowidth scales the icons to the same size. Some fonts need it, on
# others it produces shearing.
autowidth: false
no_hash: true
force: false
debug: false
quiet: false

input:
    vectors: "icons/{font}"

# All output placed in one location
output:
    fonts: "compiled_fonts/{font}"
    css:   "compiled_fonts/{font}"

templates:
- scss
- css
- preview
"#,
        font = font_name
    )
}

/// Write the fontcustom configuration, replacing any previous one
pub fn write_font_config(path: &Path, font_name: &str, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory_exists(parent, config)?;
    }
    write_file(path, &render_font_config(font_name), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_keeps_template_braces() {
        let yml = render_font_config("myfont");
        assert!(yml.contains(r#"css_selector: ".myfont-icon-{{glyph}}""#));
        assert!(yml.contains(r#"vectors: "icons/myfont""#));
    }

    #[test]
    fn rendered_config_is_valid_yaml() {
        let doc: serde_yaml::Value = serde_yaml::from_str(&render_font_config("entypo")).unwrap();
        assert_eq!(doc["font_name"].as_str(), Some("entypo"));
        assert_eq!(doc["output"]["css"].as_str(), Some("compiled_fonts/entypo"));
        assert_eq!(doc["templates"].as_sequence().map(Vec::len), Some(3));
    }

    #[test]
    fn write_creates_parent_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::new(false, tmp.path());
        let path = config.fontcustom_config_path();

        write_font_config(&path, "first", &config).unwrap();
        write_font_config(&path, "second", &config).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("font_name: \"second\""));
        assert!(!written.contains("first"));
    }
}
