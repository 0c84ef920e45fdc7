//! Embedded assets for Component Gallery
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Our own icons shadow the component library's
        if let Some(f) = Self::get(path) {
            return Ok(Some(f.data));
        }
        ComponentAssets::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            ComponentAssets::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Custom icon names for Component Gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    /// Filled heart (liked)
    HeartFill,
    /// Outline heart (not liked)
    HeartOutline,
    /// Alert dismiss cross
    Close,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::HeartFill => "icons/heart-fill.svg",
            CustomIconName::HeartOutline => "icons/heart-outline.svg",
            CustomIconName::Close => "icons/close.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}
