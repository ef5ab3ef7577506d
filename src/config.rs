//! Fixed scene parameters. Everything the page hard-codes lives here so the
//! core can be exercised on the host with the same numbers the browser uses.

use glam::Vec3;

use crate::uniforms::Color;

#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// CSS selector of the drawing surface.
    pub canvas_selector: String,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    /// Sphere radius as a fraction of the viewport height.
    pub radius_factor: f32,
    /// Icosahedron subdivision level.
    pub detail: u32,
    pub speed: f32,
    pub wave: f32,
    pub frequency: f32,
    pub color1: Color,
    pub color2: Color,
    /// Radians subtracted from the mesh spin every frame while spinning.
    pub spin_step: f32,
    pub spinning: bool,
    pub light_direction: Vec3,
    pub light_intensity: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_selector: "#canvas".to_owned(),
            fov_degrees: 45.0,
            near: 1.0,
            radius_factor: 0.4,
            detail: 24,
            speed: 2.0,
            wave: 0.0,
            frequency: 0.0,
            color1: Color::from_hex(0xd43f8c),
            color2: Color::from_hex(0x014fc4),
            spin_step: 0.001,
            spinning: true,
            light_direction: Vec3::ONE,
            light_intensity: 1.5,
        }
    }
}

impl SceneConfig {
    pub fn with_canvas_selector(mut self, selector: impl Into<String>) -> Self {
        self.canvas_selector = selector.into();
        self
    }
}
