//! Example programs listing every icon of a font in a scrollable grid
//!
//! Templates use `%name%` for the font name and `%Name%` for its
//! capitalized form.

use crate::models::IconRecord;
use crate::utils::capitalize;
use super::header::{c_developer_note, py_developer_note};

const CPP_PROLOGUE: &str = r#"#include <nanogui/nanogui.h>
#include <nanogui/resources.h>
#include <nanogui/%name%.h>
using namespace nanogui;

// Theme that loads the %name% font and uses it for icons
class %Name%Theme : public nanogui::Theme {
public:
    virtual std::string defaultIconFont() const override { return "%name%"; }

    %Name%Theme(NVGcontext *ctx) : nanogui::Theme(ctx) {
        m%Name%Font = nanogui::createFontMem(ctx, "%name%", "%name%.ttf");
        if (m%Name%Font == -1)
            throw std::runtime_error("Could not load the %name% font!");

        // Applications should also override the default icon choices
        // (mCheckBoxIcon, mMessageInformationIcon, mPopupChevronRightIcon, ...).
        // See the documentation of nanogui::Theme.
    }

    virtual ~%Name%Theme() { }

protected:
    int m%Name%Font = -1;
};

class %Name%Screen : public nanogui::Screen {
public:
    %Name%Screen(const Vector2i &size, const std::string &title, bool resizable)
        : nanogui::Screen(size, title, resizable) {
        m%Name%Theme = new %Name%Theme(this->mNVGContext);
        this->setTheme(m%Name%Theme);
    }

    virtual ~%Name%Screen() { }

    // <ESCAPE> closes the window
    virtual bool keyboardEvent(int key, int scancode, int action, int modifiers) override {
        if (key == GLFW_KEY_ESCAPE && modifiers == 0) {
            setVisible(false);
            return true;
        }

        return Screen::keyboardEvent(key, scancode, action, modifiers);
    }

protected:
    nanogui::ref<%Name%Theme> m%Name%Theme;
};

// Adds an IconBox labelled with the constant name; needs a trailing semicolon
#define ADD_ICON(parent, icon, boxWidth) \
    new IconBox(parent, #icon, icon, boxWidth)

class IconBox : public Widget {
public:
    IconBox(Widget *parent, const std::string &name, int icon, int width)
        : Widget(parent) {
        this->setLayout(new BoxLayout(Orientation::Horizontal));

        auto *b = new Button(this, "", icon);
        b->setFixedWidth(40);

        auto *text = new TextBox(this, name);
        text->setDefaultValue(name);
        // editable so the name can be selected and copied, the callback
        // rejects every edit
        text->setEditable(true);
        text->setCallback([](const std::string &) { return false; });
        text->setFont("mono-bold");
        text->setFixedWidth(width - 40);
    }
};

int main(int /* argc */, char ** /* argv */) {
    nanogui::init();

    {
        static constexpr int width      = 1000;
        static constexpr int half_width = width / 2;
        static constexpr int height     = 800;

        %Name%Screen *screen = new %Name%Screen({width, height}, "NanoGUI %Name% Icons", false);

        Window *window = new Window(screen, "");
        window->setPosition({0, 0});
        window->setFixedSize({width, height});

        auto vscroll = new VScrollPanel(window);
        vscroll->setFixedSize({width, height});

        // a VScrollPanel holds exactly one child
        auto wrapper = new Widget(vscroll);
        wrapper->setFixedSize({width, height});
        wrapper->setLayout(new GridLayout()); // two columns

"#;

const CPP_EPILOGUE: &str = r#"
        screen->performLayout();
        screen->setVisible(true);

        nanogui::mainloop();
    }

    nanogui::shutdown();
    return 0;
}
"#;

const PY_PROLOGUE: &str = r#"import gc

import nanogui
from nanogui import Screen, Window, Widget, GridLayout, VScrollPanel, Button, TextBox, BoxLayout, Orientation, Theme
from nanogui import %name%


class %Name%Theme(nanogui.Theme):
    # use this font for icons
    def defaultIconFont(self):
        return "%name%"

    def __init__(self, ctx):
        super(%Name%Theme, self).__init__(ctx)
        self.m%Name%Font = nanogui.createFontMem(ctx, "%name%", "%name%.ttf")
        if self.m%Name%Font == -1:
            raise RuntimeError("Could not load the %name% font!")

        # Applications should also override the default icon choices
        # (mCheckBoxIcon, mMessageInformationIcon, mPopupChevronRightIcon, ...).
        # See the documentation of nanogui::Theme.


class EscapeScreen(nanogui.Screen):
    def __init__(self, size, title, resizable):
        super(EscapeScreen, self).__init__(size, title, resizable)

    # <ESCAPE> closes the window
    def keyboardEvent(self, key, scancode, action, modifiers):
        if key == nanogui.glfw.KEY_ESCAPE and modifiers == 0:
            self.setVisible(False)
            return True

        return super(EscapeScreen, self).keyboardEvent(key, scancode, action, modifiers)


class IconBox(nanogui.Widget):
    def __init__(self, parent, name, icon, width):
        super(IconBox, self).__init__(parent)

        self.setLayout(nanogui.BoxLayout(nanogui.Orientation.Horizontal))

        b = nanogui.Button(self, "", icon)
        b.setFixedWidth(40)

        text = nanogui.TextBox(self, name)
        text.setDefaultValue(name)
        # editable so the name can be selected and copied, the callback
        # rejects every edit
        text.setEditable(True)
        text.setCallback(lambda x: False)
        text.setFont("mono-bold")
        text.setFixedWidth(width - 40)


if __name__ == "__main__":
    nanogui.init()

    width      = 1000
    half_width = width // 2
    height     = 800

    screen = EscapeScreen((width, height), "NanoGUI %Name% Icons", False)

    # setTheme only takes effect once the screen constructor has returned,
    # children created afterwards inherit the theme
    theme = %Name%Theme(screen.nvgContext())
    screen.setTheme(theme)

    window = Window(screen, "")
    window.setPosition((0, 0))
    window.setFixedSize((width, height))

    vscroll = VScrollPanel(window)
    vscroll.setFixedSize((width, height))

    # a VScrollPanel holds exactly one child
    wrapper = Widget(vscroll)
    wrapper.setFixedSize((width, height))
    wrapper.setLayout(GridLayout())  # two columns

"#;

const PY_EPILOGUE: &str = r#"
    screen.performLayout()
    screen.drawAll()
    screen.setVisible(True)

    nanogui.mainloop()

    del screen
    gc.collect()

    nanogui.shutdown()
"#;

const SEPARATOR: &str = "        ////////////////////////////////////////////////////////////////////////\n";

fn fill(template: &str, font_name: &str) -> String {
    template
        .replace("%Name%", &capitalize(font_name))
        .replace("%name%", font_name)
}

/// Render `example_<font>.cpp`
pub fn render_cpp_example(records: &[IconRecord], font_name: &str) -> String {
    let mut out = format!("{}\n\n{}", c_developer_note(), fill(CPP_PROLOGUE, font_name));
    out.push_str(SEPARATOR);
    for record in records {
        out.push_str(&format!("        ADD_ICON(wrapper, {}, half_width);\n", record.symbol));
    }
    out.push_str(SEPARATOR);
    out.push_str(CPP_EPILOGUE);
    out
}

/// Render `example_<font>.py`
pub fn render_python_example(records: &[IconRecord], font_name: &str) -> String {
    let mut out = format!("{}\n\n{}", py_developer_note(), fill(PY_PROLOGUE, font_name));
    for record in records {
        out.push_str(&format!(
            "    IconBox(wrapper, \"ICON_{short}\", {font}.ICON_{short}, half_width)\n",
            short = record.short_name(),
            font = font_name
        ));
    }
    out.push_str(PY_EPILOGUE);
    out
}
