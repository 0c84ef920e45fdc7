//! Color - Variant names and style references
//!
//! Variants follow the Bootstrap naming (`primary`, `danger`, ...). Any other
//! name is kept verbatim so its style reference still carries it; it just
//! paints with the neutral palette.

use std::fmt;
use std::str::FromStr;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Color variant selecting a presentation style
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ColorVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
    /// A name with no matching style
    Custom(SharedString),
}

impl ColorVariant {
    /// All named variants, in display order
    pub fn all() -> &'static [ColorVariant] {
        &[
            ColorVariant::Primary,
            ColorVariant::Secondary,
            ColorVariant::Success,
            ColorVariant::Danger,
            ColorVariant::Warning,
            ColorVariant::Info,
            ColorVariant::Light,
            ColorVariant::Dark,
        ]
    }

    /// Parse a variant name; unknown names become `Custom`.
    ///
    /// Matching is exact, like a class lookup: `"PRIMARY"` has no style and
    /// stays `Custom("PRIMARY")`, so its style reference keeps that spelling.
    pub fn parse(name: &str) -> Self {
        match name {
            "primary" => ColorVariant::Primary,
            "secondary" => ColorVariant::Secondary,
            "success" => ColorVariant::Success,
            "danger" => ColorVariant::Danger,
            "warning" => ColorVariant::Warning,
            "info" => ColorVariant::Info,
            "light" => ColorVariant::Light,
            "dark" => ColorVariant::Dark,
            _ => ColorVariant::Custom(SharedString::from(name.to_string())),
        }
    }

    /// The variant name as written in a style reference
    pub fn name(&self) -> &str {
        match self {
            ColorVariant::Primary => "primary",
            ColorVariant::Secondary => "secondary",
            ColorVariant::Success => "success",
            ColorVariant::Danger => "danger",
            ColorVariant::Warning => "warning",
            ColorVariant::Info => "info",
            ColorVariant::Light => "light",
            ColorVariant::Dark => "dark",
            ColorVariant::Custom(name) => &**name,
        }
    }

    /// Whether a dedicated palette exists for this variant
    pub fn is_known(&self) -> bool {
        !matches!(self, ColorVariant::Custom(_))
    }

    /// Style reference for a component base class, e.g. `btn btn-primary`
    pub fn class_name(&self, base: &str, scope: StyleScope) -> SharedString {
        let color = self.name();
        match scope {
            StyleScope::Global => format!("{base} {base}-{color}").into(),
            StyleScope::Scoped => {
                let module = scope_module(base);
                format!("{module}_{base} {module}_{base}-{color}").into()
            }
        }
    }
}

/// Stylesheet module name used for scoped class references
fn scope_module(base: &str) -> &'static str {
    match base {
        "btn" => "Button",
        "alert" => "Alert",
        "list-group" => "ListGroup",
        _ => "Component",
    }
}

impl FromStr for ColorVariant {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for ColorVariant {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for ColorVariant {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How style references are spelled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleScope {
    /// Plain global class strings (`btn btn-primary`)
    #[default]
    Global,
    /// Module-scoped class strings (`Button_btn Button_btn-primary`)
    Scoped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!(ColorVariant::parse("primary"), ColorVariant::Primary);
        assert_eq!(ColorVariant::parse("danger"), ColorVariant::Danger);
        assert_eq!(ColorVariant::parse("dark"), ColorVariant::Dark);
    }

    #[test]
    fn caller_spelling_is_kept_in_class_name() {
        let color = ColorVariant::parse("PRIMARY");
        assert!(!color.is_known());
        assert_eq!(&**color.class_name("btn", StyleScope::Global), "btn btn-PRIMARY");

        let padded = ColorVariant::parse(" danger ");
        assert_eq!(&**padded.class_name("btn", StyleScope::Global), "btn btn- danger ");
    }

    #[test]
    fn unknown_name_is_kept() {
        let color = ColorVariant::parse("chartreuse");
        assert!(!color.is_known());
        assert_eq!(color.name(), "chartreuse");
        assert_eq!(color.to_string(), "chartreuse");
    }

    #[test]
    fn every_named_variant_parses_back() {
        for color in ColorVariant::all() {
            assert_eq!(&ColorVariant::parse(color.name()), color);
        }
    }

    #[test]
    fn global_class_contains_color() {
        let class = ColorVariant::Primary.class_name("btn", StyleScope::Global);
        assert_eq!(&**class, "btn btn-primary");
    }

    #[test]
    fn scoped_class_contains_color() {
        let class = ColorVariant::Primary.class_name("btn", StyleScope::Scoped);
        assert_eq!(&**class, "Button_btn Button_btn-primary");
        assert!(class.contains("primary"));
    }

    #[test]
    fn empty_name_degrades() {
        let color: ColorVariant = "".into();
        assert_eq!(color, ColorVariant::Custom(SharedString::default()));
        assert_eq!(color.class_name("btn", StyleScope::Global).to_string(), "btn btn-");
    }
}
