use std::collections::HashMap;
use regex::Regex;
use crate::error::{Error, Result};
use crate::models::IconRecord;

/// Matcher for the icon rules fontcustom writes, e.g.
/// `.entypo-icon-location:before { content: "\e724"; }`
fn icon_rule_regex(font_name: &str) -> Regex {
    let pattern = format!(
        r#"^\.{}-icon-(.+):before \{{ content: "\\([0-9a-fA-F]+)"; \}}"#,
        regex::escape(font_name)
    );
    Regex::new(&pattern).unwrap()
}

/// Extract the icon records of `font_name` from compiled CSS, in file order
///
/// Lines that are not icon rules are skipped. Two names that produce the same
/// constant (`arrow-left` and `arrow_left`, `Home` and `home`) are rejected.
pub fn parse_icon_table(css: &str, font_name: &str) -> Result<Vec<IconRecord>> {
    let re = icon_rule_regex(font_name);
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut records = Vec::new();

    for (index, line) in css.lines().enumerate() {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        let name = &caps[1];
        let code = u32::from_str_radix(&caps[2], 16).map_err(|e| Error::Css {
            line: index + 1,
            message: format!("invalid code point '{}' for icon '{}': {}", &caps[2], name, e),
        })?;
        let record = IconRecord::new(font_name, name, code);
        if let Some(first) = seen.insert(record.symbol.clone(), name.to_string()) {
            return Err(Error::DuplicateIcon {
                symbol: record.symbol,
                first,
                second: name.to_string(),
            });
        }
        records.push(record);
    }

    Ok(records)
}

/// Fail unless exactly `expected` icons were parsed
pub fn check_icon_count(records: &[IconRecord], expected: usize) -> Result<()> {
    if records.len() == expected {
        Ok(())
    } else {
        Err(Error::IconCountMismatch {
            found: records.len(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSS: &str = r#"/*
  Icon Font: myfont
*/
@font-face { font-family: "myfont"; }
.myfont-icon-home:before { content: "\e001"; }
.myfont-icon-star:before { content: "\e002"; }
"#;

    #[test]
    fn parses_matching_lines_in_order() {
        let records = parse_icon_table(CSS, "myfont").unwrap();
        let summary: Vec<_> = records
            .iter()
            .map(|r| (r.name.as_str(), r.symbol.as_str(), r.hex_code()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("home", "MYFONT_ICON_HOME", "0x0000E001".to_string()),
                ("star", "MYFONT_ICON_STAR", "0x0000E002".to_string()),
            ]
        );
        assert!(check_icon_count(&records, 2).is_ok());
    }

    #[test]
    fn count_mismatch_reports_both_numbers() {
        let records = parse_icon_table(CSS, "myfont").unwrap();
        let err = check_icon_count(&records, 3).unwrap_err();
        assert_eq!(err.to_string(), "Found [2] icons, expected [3]");
    }

    #[test]
    fn other_fonts_and_noise_are_skipped() {
        let css = ".other-icon-home:before { content: \"\\e001\"; }\n\
                   .myfont-icon-home:after { content: \"\\e001\"; }\n\
                   garbage\n";
        assert!(parse_icon_table(css, "myfont").unwrap().is_empty());
    }

    #[test]
    fn hyphenated_names_become_underscored_symbols() {
        let css = ".entypo-icon-arrow-bold-left:before { content: \"\\E724\"; }\n";
        let records = parse_icon_table(css, "entypo").unwrap();
        assert_eq!(records[0].symbol, "ENTYPO_ICON_ARROW_BOLD_LEFT");
        assert_eq!(records[0].hex_code(), "0x0000E724");
    }

    #[test]
    fn hex_case_does_not_change_output() {
        let lower = parse_icon_table(".f-icon-a:before { content: \"\\e7a4\"; }", "f").unwrap();
        let upper = parse_icon_table(".f-icon-a:before { content: \"\\E7A4\"; }", "f").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower[0].hex_code(), "0x0000E7A4");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let css = ".f-icon-a:before { content: \"\\e001\"; }\n\
                   .f-icon-a:before { content: \"\\e002\"; }\n";
        assert!(matches!(
            parse_icon_table(css, "f"),
            Err(Error::DuplicateIcon { ref first, ref second, .. }) if first == "a" && second == "a"
        ));
    }

    #[test]
    fn names_colliding_on_the_constant_are_rejected() {
        let css = ".f-icon-arrow-left:before { content: \"\\e001\"; }\n\
                   .f-icon-arrow_left:before { content: \"\\e002\"; }\n";
        let err = parse_icon_table(css, "f").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Icons 'arrow-left' and 'arrow_left' both define F_ICON_ARROW_LEFT"
        );

        let css = ".f-icon-Home:before { content: \"\\e003\"; }\n\
                   .f-icon-home:before { content: \"\\e004\"; }\n";
        assert!(matches!(
            parse_icon_table(css, "f"),
            Err(Error::DuplicateIcon { ref symbol, .. }) if symbol == "F_ICON_HOME"
        ));
    }

    #[test]
    fn oversized_code_reports_the_line() {
        let css = "\n.f-icon-a:before { content: \"\\123456789\"; }\n";
        assert!(matches!(parse_icon_table(css, "f"), Err(Error::Css { line: 2, .. })));
    }
}
