use crate::models::IconRecord;

pub(crate) const GENERATED_NOTE: &str = "need to make a change to this file?\n\
Please raise an Issue on GitHub describing what needs to change. This file\n\
was generated, so the tools that generated it need to update as well.";

/// The developer note as a C block comment
pub(crate) fn c_developer_note() -> String {
    let mut lines = GENERATED_NOTE.lines();
    let mut out = format!("/* Developer note: {}\n", lines.next().unwrap_or_default());
    for line in lines {
        out.push_str(&format!(" * {}\n", line));
    }
    out.push_str(" */");
    out
}

/// The developer note as `#` comments
pub(crate) fn py_developer_note() -> String {
    let mut lines = GENERATED_NOTE.lines();
    let mut out = format!("# Developer note: {}", lines.next().unwrap_or_default());
    for line in lines {
        out.push_str(&format!("\n# {}", line));
    }
    out
}

/// Width every `#define` symbol is padded to
pub fn symbol_width(records: &[IconRecord]) -> usize {
    records.iter().map(|r| r.symbol.len()).max().unwrap_or(0)
}

/// Render `<font>.h`: one `#define` per icon, code column aligned
pub fn render_header(records: &[IconRecord], font_name: &str, license: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "/*\n    \
         NanoGUI was developed by Wenzel Jakob <wenzel.jakob@epfl.ch>.\n    \
         The widget drawing code is based on the NanoVG demo application\n    \
         by Mikko Mononen.\n\n    \
         All rights reserved. Use of this source code is governed by a\n    \
         BSD-style license that can be found in the LICENSE.txt file.\n\n    \
         Constants for the icons of the {font} font.\n\n    \
         License: {license}\n\
         */\n\n\
         {note}\n\n\
         #pragma once\n\n",
        font = font_name,
        license = license,
        note = c_developer_note(),
    ));

    let width = symbol_width(records);
    for record in records {
        out.push_str(&format!(
            "#define {:<width$} {}\n",
            record.symbol,
            record.hex_code(),
            width = width
        ));
    }
    out
}
