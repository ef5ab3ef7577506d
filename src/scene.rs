//! The fixed scene: one camera, one light, one group holding one mesh.

use glam::{Mat4, Vec3};

use crate::config::SceneConfig;
use crate::geometry::Icosphere;
use crate::viewport::{Camera, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub intensity: f32,
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Icosphere,
    pub wireframe: bool,
    /// Passive rotation around Y, applied inside the group transform.
    pub spin: f32,
}

impl Mesh {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.spin)
    }
}

#[derive(Debug, Clone)]
pub struct Group {
    pub rotation_y: f32,
    pub position: Vec3,
    pub mesh: Mesh,
}

impl Group {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_y(self.rotation_y)
    }

    /// World matrix of the contained mesh.
    pub fn model(&self) -> Mat4 {
        self.matrix() * self.mesh.matrix()
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub light: DirectionalLight,
    pub group: Group,
}

impl Scene {
    pub fn new(viewport: Viewport, config: &SceneConfig) -> Self {
        let radius = viewport.height as f32 * config.radius_factor;
        log::debug!(
            "building icosphere radius={radius} detail={}",
            config.detail
        );
        Self {
            camera: Camera::new(viewport, config.fov_degrees, config.near),
            light: DirectionalLight {
                direction: config.light_direction.normalize(),
                intensity: config.light_intensity,
            },
            group: Group {
                rotation_y: 0.0,
                position: Vec3::ZERO,
                mesh: Mesh {
                    geometry: Icosphere::new(radius, config.detail),
                    wireframe: true,
                    spin: 0.0,
                },
            },
        }
    }
}
