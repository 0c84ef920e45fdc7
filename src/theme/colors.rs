//! Colors - Gallery Theme Colors

use gpui::{rgb, rgba, Rgba};

use crate::domain::color::ColorVariant;

/// Fill, text and hover colors for one color variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantPalette {
    pub bg: Rgba,
    pub text: Rgba,
    pub hover_bg: Rgba,
    pub border: Rgba,
}

/// Gallery color palette - All colors are accessed via associated functions
pub struct GalleryColors;

impl GalleryColors {
    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf8f9fa) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Console panel background
    pub fn console_bg() -> Rgba { rgb(0x1a2332) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x212529) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6c757d) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xdee2e6) }

    // List colors
    /// Active list row
    pub fn list_active_bg() -> Rgba { rgb(0x0d6efd) }
    /// Hovered list row
    pub fn list_hover_bg() -> Rgba { rgb(0xf1f3f5) }

    // Like colors
    /// Filled heart
    pub fn like_red() -> Rgba { rgb(0xff0000) }
    /// Outline heart
    pub fn like_outline() -> Rgba { rgb(0x212529) }

    /// Palette for a solid control (button) in the given variant
    pub fn solid(color: &ColorVariant) -> VariantPalette {
        let (bg, text, hover_bg) = match color {
            ColorVariant::Primary => (0x0d6efd, 0xffffff, 0x0b5ed7),
            ColorVariant::Secondary => (0x6c757d, 0xffffff, 0x5c636a),
            ColorVariant::Success => (0x198754, 0xffffff, 0x157347),
            ColorVariant::Danger => (0xdc3545, 0xffffff, 0xbb2d3b),
            ColorVariant::Warning => (0xffc107, 0x000000, 0xffca2c),
            ColorVariant::Info => (0x0dcaf0, 0x000000, 0x31d2f2),
            ColorVariant::Light => (0xf8f9fa, 0x000000, 0xd3d4d5),
            ColorVariant::Dark => (0x212529, 0xffffff, 0x424649),
            // No matching style: fall back to a plain bordered control
            ColorVariant::Custom(_) => (0xe9ecef, 0x212529, 0xdee2e6),
        };
        VariantPalette {
            bg: rgb(bg),
            text: rgb(text),
            hover_bg: rgb(hover_bg),
            border: rgb(bg),
        }
    }

    /// Palette for a subtle surface (alert banner) in the given variant
    pub fn subtle(color: &ColorVariant) -> VariantPalette {
        let (bg, text, border) = match color {
            ColorVariant::Primary => (0xcfe2ff, 0x052c65, 0x9ec5fe),
            ColorVariant::Secondary => (0xe2e3e5, 0x2b2f32, 0xc4c8cb),
            ColorVariant::Success => (0xd1e7dd, 0x0a3622, 0xa3cfbb),
            ColorVariant::Danger => (0xf8d7da, 0x58151c, 0xf1aeb5),
            ColorVariant::Warning => (0xfff3cd, 0x664d03, 0xffe69c),
            ColorVariant::Info => (0xcff4fc, 0x055160, 0x9eeaf9),
            ColorVariant::Light => (0xfcfcfd, 0x495057, 0xe9ecef),
            ColorVariant::Dark => (0xced4da, 0x495057, 0xadb5bd),
            ColorVariant::Custom(_) => (0xf8f9fa, 0x212529, 0xdee2e6),
        };
        VariantPalette {
            bg: rgb(bg),
            text: rgb(text),
            hover_bg: rgba(0x0000000f),
            border: rgb(border),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_gets_neutral_palette() {
        let custom = GalleryColors::solid(&ColorVariant::parse("no-such-color"));
        let other = GalleryColors::solid(&ColorVariant::parse("also-missing"));
        assert_eq!(custom, other);
        assert_ne!(custom, GalleryColors::solid(&ColorVariant::Primary));
    }

    #[test]
    fn named_variants_have_distinct_fills() {
        let fills: Vec<_> = ColorVariant::all()
            .iter()
            .map(|c| GalleryColors::solid(c).bg)
            .collect();
        for (i, a) in fills.iter().enumerate() {
            for b in &fills[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
