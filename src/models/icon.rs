/// One glyph parsed from the compiled CSS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    /// Glyph name as written in the CSS selector, e.g. `arrow-left`
    pub name: String,
    /// Code point of the glyph
    pub code: u32,
    /// Constant name, e.g. `MYFONT_ICON_ARROW_LEFT`
    pub symbol: String,
}

impl IconRecord {
    pub fn new(font_name: &str, name: &str, code: u32) -> Self {
        Self {
            name: name.to_string(),
            code,
            symbol: icon_symbol(font_name, name),
        }
    }

    /// The constant name without the `<FONT>_ICON_` prefix
    pub fn short_name(&self) -> String {
        self.name.replace('-', "_").to_uppercase()
    }

    /// `0x` followed by eight upper case hex digits
    pub fn hex_code(&self) -> String {
        format!("0x{:08X}", self.code)
    }
}

/// Build the constant name for a glyph of `font_name`
pub fn icon_symbol(font_name: &str, icon_name: &str) -> String {
    format!(
        "{}_ICON_{}",
        font_name.to_uppercase(),
        icon_name.replace('-', "_").to_uppercase()
    )
}
