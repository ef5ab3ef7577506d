//! Window size and the camera derived from it.
//!
//! The camera is placed so that one world unit maps to one CSS pixel on the
//! `z = 0` plane: with a vertical field of view `fov`, a plane of height `h`
//! fills the frame at distance `(h / 2) / tan(fov / 2)`.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Zero dimensions are clamped to 1 so the aspect ratio stays finite.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_degrees: f32,
    pub near: f32,
    pub aspect: f32,
    pub distance: f32,
    pub far: f32,
}

/// Distance at which a plane of `height` exactly fills a `fov_degrees` view.
pub fn camera_distance(height: u32, fov_degrees: f32) -> f32 {
    let half_fov = (fov_degrees / 2.0).to_radians();
    (height as f32 / 2.0) / half_fov.tan()
}

impl Camera {
    pub fn new(viewport: Viewport, fov_degrees: f32, near: f32) -> Self {
        let mut camera = Self {
            fov_degrees,
            near,
            aspect: 1.0,
            distance: 1.0,
            far: 2.0,
        };
        camera.fit(viewport);
        camera
    }

    /// Re-derives aspect, distance and far plane from a new viewport.
    pub fn fit(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
        self.distance = camera_distance(viewport.height, self.fov_degrees);
        self.far = self.distance * 2.0;
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Looks at the origin from `+z`.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y)
    }
}
