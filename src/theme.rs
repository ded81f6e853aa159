// 🎨 Theme - Light/dark flag and the colours each mode paints with
// Independent of the ledger: toggling never touches counts or the total.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    /// Short name for the header indicator
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }
}

// ============================================================================
// PALETTE
// ============================================================================

/// 24-bit colour, converted to a terminal colour by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub input: Rgb,
    pub focus: Rgb,
    pub total_bar: Rgb,
    pub on_total_bar: Rgb,
    pub reset: Rgb,
    pub toggle: Rgb,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Rgb(0xf3, 0xf4, 0xf6),
        surface: Rgb(0xff, 0xff, 0xff),
        text: Rgb(0x11, 0x18, 0x27),
        muted: Rgb(0x6b, 0x72, 0x80),
        input: Rgb(0xf9, 0xfa, 0xfb),
        focus: Rgb(0x60, 0xa5, 0xfa),
        total_bar: Rgb(0x25, 0x63, 0xeb),
        on_total_bar: Rgb(0xff, 0xff, 0xff),
        reset: Rgb(0xef, 0x44, 0x44),
        toggle: Rgb(0x37, 0x41, 0x51),
    };

    pub const DARK: Palette = Palette {
        background: Rgb(0x11, 0x18, 0x27),
        surface: Rgb(0x1f, 0x29, 0x37),
        text: Rgb(0xf3, 0xf4, 0xf6),
        muted: Rgb(0x9c, 0xa3, 0xaf),
        input: Rgb(0x37, 0x41, 0x51),
        focus: Rgb(0x3b, 0x82, 0xf6),
        total_bar: Rgb(0x1e, 0x40, 0xaf),
        on_total_bar: Rgb(0xff, 0xff, 0xff),
        reset: Rgb(0xdc, 0x26, 0x26),
        toggle: Rgb(0xfd, 0xe0, 0x47),
    };
}
