//! Color palettes for the light and dark schemes.

use super::theme::ThemeScheme;

/// Named colors of one scheme, as `#RRGGBB` (or `rgba(...)` for shadows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub surface2: &'static str,
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub primary_soft: &'static str,
    pub primary_soft2: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub text_on_primary: &'static str,
    pub border: &'static str,
    pub divider: &'static str,
    pub icon: &'static str,
    pub icon_muted: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub shadow: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#F7F6FF",
    surface: "#FFFFFF",
    surface2: "#F2F1FF",
    primary: "#6C63FF",
    primary_dark: "#4E46E5",
    primary_soft: "#E7E6FF",
    primary_soft2: "#F0EFFF",
    text: "#0F172A",
    text_muted: "#64748B",
    text_on_primary: "#FFFFFF",
    border: "#E6E4FF",
    divider: "#ECEBFF",
    icon: "#4338CA",
    icon_muted: "#7C7AAE",
    success: "#22C55E",
    warning: "#F59E0B",
    danger: "#EF4444",
    shadow: "rgba(17, 24, 39, 0.10)",
};

pub const DARK: Palette = Palette {
    background: "#0B1020",
    surface: "#12172A",
    surface2: "#1A2140",
    primary: "#8B82FF",
    primary_dark: "#5B54E6",
    primary_soft: "#2A2952",
    primary_soft2: "#232146",
    text: "#E6EAF5",
    text_muted: "#9AA3B2",
    text_on_primary: "#FFFFFF",
    border: "#242B49",
    divider: "#1F2540",
    icon: "#B9B6FF",
    icon_muted: "#8A90B5",
    success: "#22C55E",
    warning: "#F59E0B",
    danger: "#F87171",
    shadow: "rgba(0, 0, 0, 0.35)",
};

impl Palette {
    pub fn for_scheme(scheme: ThemeScheme) -> &'static Palette {
        match scheme {
            ThemeScheme::Light => &LIGHT,
            ThemeScheme::Dark => &DARK,
        }
    }

    /// Hero gradient stops, top-left to bottom-right.
    pub fn hero_gradient(&self, scheme: ThemeScheme) -> [&'static str; 3] {
        match scheme {
            ThemeScheme::Dark => [self.primary_dark, self.primary, self.primary_soft],
            ThemeScheme::Light => [self.primary, self.primary_dark, self.primary_soft2],
        }
    }
}

/// Parse `#RRGGBB` into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
