use std::io::{self, BufRead, Write};
use crate::error::{Error, Result};

/// Explain what is expected and read one license line from `input`
pub fn prompt_license<R: BufRead, W: Write>(
    font_name: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    writeln!(
        output,
        ">>> Please enter the license information for the {} font, including a\n    \
         URL to the official license. For example, the Font Awesome 5 Free\n    \
         icons are governed by CC-BY-SA 4.0, so you would enter:\n\n        \
         CC-BY-SA 4.0: https://github.com/FortAwesome/Font-Awesome/blob/master/LICENSE.txt\n\n    \
         Any input without 'http' in it will be rejected. Input must be on one line.\n",
        font_name
    )?;
    write!(output, "   license> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no license entered. Goodbye...",
        )));
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Use the license given on the command line, or ask for it on stdin
pub fn get_license(font_name: &str, given: Option<String>) -> Result<String> {
    match given {
        Some(license) => Ok(license),
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            prompt_license(font_name, &mut input, &mut io::stdout())
        }
    }
}
