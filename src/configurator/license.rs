use crate::error::{Error, Result};

/// A license must reference its URL and fit on one line
pub fn validate_license(license: &str) -> Result<()> {
    if !license.contains("http") {
        return Err(Error::InvalidLicense(
            "please include a URL to the official license of the font. \
             The license information is embedded in the generated header and bindings."
                .to_string(),
        ));
    }
    if license.contains('\n') || license.contains('\r') {
        return Err(Error::InvalidLicense(
            "the license information must be on one line, without newline characters \
             or carriage returns."
                .to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn license_needs_a_url() {
        assert!(validate_license("MIT license, no link").is_err());
        assert!(validate_license("MIT: http://example.com").is_ok());
    }

    #[test]
    fn license_must_be_single_line() {
        assert!(validate_license("MIT:\nhttp://example.com").is_err());
        assert!(validate_license("MIT: http://example.com\r").is_err());
    }
}
