use crate::models::IconRecord;
use super::header::c_developer_note;

/// Render `constants_<font>.cpp`, registering every icon in a Python submodule
pub fn render_binding_stub(records: &[IconRecord], font_name: &str, license: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "#ifdef NANOGUI_PYTHON\n\
         \n\
         #include \"python.h\"\n\
         #include <nanogui/{font}.h>\n\
         \n\
         /* Python bindings for the {font} font.\n \
         *\n \
         * License: {license}\n \
         */\n\
         \n\
         {note}\n\
         \n\
         void register_constants_{font}(py::module &m) {{\n    \
             /* bindings for the {font} font */\n    \
             {{\n        \
                 #define C(name) g.attr(\"ICON_\" #name) = py::int_({upper}_ICON_##name);\n        \
                 py::module g = m.def_submodule(\"{font}\");\n",
        font = font_name,
        upper = font_name.to_uppercase(),
        license = license,
        note = c_developer_note(),
    ));

    for record in records {
        out.push_str(&format!("        C({});\n", record.short_name()));
    }

    out.push_str(
        "        #undef C\n    \
             }\n\
         }\n\
         \n\
         #endif\n",
    );
    out
}
