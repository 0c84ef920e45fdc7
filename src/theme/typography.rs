//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
}
