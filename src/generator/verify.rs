use ttf_parser::Face;
use crate::error::{Error, Result};
use crate::models::IconRecord;

/// Check that the compiled font has a glyph for every icon code
pub fn verify_font(records: &[IconRecord], font_data: &[u8]) -> Result<()> {
    let face = Face::parse(font_data, 0)
        .map_err(|e| Error::Font(format!("could not parse compiled font: {}", e)))?;

    let missing: Vec<String> = records
        .iter()
        .filter(|record| {
            char::from_u32(record.code)
                .and_then(|c| face.glyph_index(c))
                .is_none()
        })
        .map(|record| format!("{} ({})", record.symbol, record.hex_code()))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Font(format!(
            "{} icon(s) have no glyph in the compiled font: {}",
            missing.len(),
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // cmap maps U+E001 and U+E002 only
    const FIXTURE_TTF: &[u8] = include_bytes!("../../tests/fixtures/myfont.ttf");

    #[test]
    fn garbage_is_not_a_font() {
        let records = vec![IconRecord::new("myfont", "home", 0xe001)];
        let err = verify_font(&records, b"not a font").unwrap_err();
        assert!(matches!(err, Error::Font(_)));
    }

    #[test]
    fn font_with_every_glyph_passes() {
        let records = vec![
            IconRecord::new("myfont", "home", 0xe001),
            IconRecord::new("myfont", "star", 0xe002),
        ];
        assert!(verify_font(&records, FIXTURE_TTF).is_ok());
    }

    #[test]
    fn missing_glyphs_are_listed() {
        let records = vec![
            IconRecord::new("myfont", "home", 0xe001),
            IconRecord::new("myfont", "moon", 0xe003),
            IconRecord::new("myfont", "sun", 0xf000),
        ];
        let err = verify_font(&records, FIXTURE_TTF).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Font error: 2 icon(s) have no glyph in the compiled font: \
             MYFONT_ICON_MOON (0x0000E003), MYFONT_ICON_SUN (0x0000F000)"
        );
    }

    #[test]
    fn surrogate_code_point_has_no_glyph() {
        let records = vec![IconRecord::new("myfont", "broken", 0xd800)];
        let err = verify_font(&records, FIXTURE_TTF).unwrap_err();
        assert!(err.to_string().contains("MYFONT_ICON_BROKEN (0x0000D800)"));
    }
}
