// File: crates/chart-core/src/theme.rs
// Summary: Renderer-agnostic colors and the dark/light presets for the chart.

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::from_argb(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const GOLD: Rgba = Rgba::rgb(0xff, 0xd7, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub tick_label: Rgba,
    /// Hand-placed axis titles ("YEAR", "TIME").
    pub axis_title: Rgba,
    pub title: Rgba,
    pub legend_text: Rgba,
    pub marker_stroke: Rgba,
    /// Records with a doping allegation.
    pub highlight: Rgba,
    /// Records without one.
    pub neutral: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(0x1d, 0x1f, 0x3b),
            axis_line: Rgba::rgb(0xe0, 0xe2, 0xfc),
            tick_label: Rgba::rgb(0xe0, 0xe2, 0xfc),
            axis_title: Rgba::rgb(0xe0, 0xe2, 0xfc),
            title: Rgba::WHITE,
            legend_text: Rgba::WHITE,
            marker_stroke: Rgba::from_argb(160, 0x1d, 0x1f, 0x3b),
            highlight: Rgba::GOLD,
            neutral: Rgba::WHITE,
            tooltip_background: Rgba::from_argb(230, 0x0b, 0x0c, 0x1e),
            tooltip_text: Rgba::WHITE,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(250, 250, 252),
            axis_line: Rgba::rgb(60, 60, 70),
            tick_label: Rgba::rgb(60, 60, 70),
            axis_title: Rgba::rgb(40, 42, 90),
            title: Rgba::rgb(20, 20, 30),
            legend_text: Rgba::rgb(20, 20, 30),
            marker_stroke: Rgba::rgb(60, 60, 70),
            highlight: Rgba::rgb(0xe0, 0xa8, 0x00),
            // white markers vanish on a light background
            neutral: Rgba::rgb(0x8a, 0x93, 0xa6),
            tooltip_background: Rgba::from_argb(235, 255, 255, 255),
            tooltip_text: Rgba::rgb(20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
