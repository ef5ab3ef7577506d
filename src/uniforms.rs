//! Values pushed to the wave shader every frame.

use glam::Vec3;

/// Linear RGB triple in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub Vec3);

impl Color {
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Color(Vec3::new(r, g, b))
    }

    pub fn to_array(self) -> [f32; 3] {
        self.0.to_array()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UniformSet {
    /// Seconds since the frame loop started. Written only by the loop.
    pub time: f32,
    pub speed: f32,
    /// Displacement amplitude.
    pub wave: f32,
    pub frequency: f32,
    pub color1: Color,
    pub color2: Color,
}

impl UniformSet {
    pub fn new(speed: f32, wave: f32, frequency: f32, color1: Color, color2: Color) -> Self {
        Self {
            time: 0.0,
            speed,
            wave,
            frequency,
            color1,
            color2,
        }
    }
}
