/// ARGB color value used throughout the kit.
///
/// Components never talk to a rendering backend directly, so colors are plain
/// data here; the host renderer converts them to whatever its canvas expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_argb(0xFF, 0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::from_argb(0xFF, 0x00, 0x00, 0x00);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xFF, r, g, b }
    }

    /// Returns this color with its alpha scaled by `opacity` (0.0..=1.0).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Moves the color channels towards white by `amount` (0.0..=1.0).
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let lift = |c: u8| c.saturating_add(((255 - c) as f32 * amount).round() as u8);
        Self {
            a: self.a,
            r: lift(self.r),
            g: lift(self.g),
            b: lift(self.b),
        }
    }
}

/// Color palette for the dropdown components.
///
/// A theme provider is optional: every component falls back to
/// `Theme::default()` when the host supplies none, so a dropdown always
/// renders with a usable palette.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent used for the hover/pre-selection highlight and the hovered
    /// header background.
    pub accent: Color,

    /// Background of the menu body and the unhovered header.
    pub surface: Color,

    /// Highlight of the row bound to the committed value.
    pub selection: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
}

impl Theme {
    /// Dark theme, also the fallback palette when no provider is injected.
    pub fn dark() -> Self {
        let accent = Color::from_rgb(0xCC, 0x52, 0x88);
        Self {
            accent,
            surface: Color::BLACK,
            selection: accent.with_opacity(0.5),

            text_primary: Color::WHITE,
            text_secondary: Color::from_argb(0xB3, 0xFF, 0xFF, 0xFF), // 70% white
            text_disabled: Color::from_argb(0x40, 0xFF, 0xFF, 0xFF),  // 25% white
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        let accent = Color::from_rgb(0x0A, 0x84, 0xFF);
        Self {
            accent,
            surface: Color::from_argb(0xCC, 0xEA, 0xEA, 0xEA),
            selection: accent.with_opacity(0.5),

            text_primary: Color::from_argb(0xD9, 0x00, 0x00, 0x00),
            text_secondary: Color::from_argb(0x80, 0x00, 0x00, 0x00),
            text_disabled: Color::from_argb(0x40, 0x00, 0x00, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
