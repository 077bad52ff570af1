use lazy_static::lazy_static;
use regex::Regex;
use crate::error::{Error, Result};

lazy_static! {
    static ref FONT_NAME_RE: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*$").unwrap();
}

/// Font names start with a letter and contain only ASCII letters and digits
pub fn is_valid_font_name(name: &str) -> bool {
    FONT_NAME_RE.is_match(name)
}

pub fn validate_font_name(name: &str) -> Result<()> {
    if is_valid_font_name(name) {
        Ok(())
    } else {
        Err(Error::InvalidFontName(name.to_string()))
    }
}

/// Upper case the first character and lower case the rest (`fontAwesome` -> `Fontawesome`)
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_name_must_start_with_a_letter() {
        assert!(validate_font_name("2cool").is_err());
        assert!(validate_font_name("entypo").is_ok());
        assert!(validate_font_name("Font5").is_ok());
    }

    #[test]
    fn font_name_rejects_symbols() {
        for name in ["my-font", "my_font", "my font", "", "fönt"] {
            assert!(!is_valid_font_name(name), "{name} should be rejected");
        }
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("fontAwesome"), "Fontawesome");
        assert_eq!(capitalize("entypo"), "Entypo");
        assert_eq!(capitalize(""), "");
    }
}
