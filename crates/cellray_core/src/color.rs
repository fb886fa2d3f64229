//! Surface colors and resolved cell colors.

use bytemuck::{Pod, Zeroable};
use cellray_math::{Interval, Vec3};

/// Color type alias (RGB channels in 0-255, may exceed 255 during shading)
pub type Color = Vec3;

/// A resolved, displayable cell color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Create a new cell color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Resolve a floating color by clamping to 0-255 and flooring each channel.
    pub fn from_color(color: Color) -> Self {
        let channel = |c: f32| Interval::CHANNEL.clamp(c).floor() as u8;
        Self {
            r: channel(color.x),
            g: channel(color.y),
            b: channel(color.z),
        }
    }

    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
}
