use wave_backdrop::viewport::{camera_distance, Camera};
use wave_backdrop::{SceneConfig, Stage, Viewport};

#[test]
fn distance_for_800px_height() {
    let d = camera_distance(800, 45.0);
    assert!((d - 965.7).abs() < 0.1, "distance = {d}");
}

#[test]
fn far_plane_is_twice_distance() {
    let camera = Camera::new(Viewport::new(1440, 900), 45.0, 1.0);
    assert_eq!(camera.far, camera.distance * 2.0);
    assert_eq!(camera.aspect, 1440.0 / 900.0);
}

#[test]
fn resize_is_idempotent() {
    let mut once = Stage::new(Viewport::new(1024, 768), SceneConfig::default());
    let mut twice = Stage::new(Viewport::new(1024, 768), SceneConfig::default());
    once.resize(1920, 1080);
    twice.resize(1920, 1080);
    twice.resize(1920, 1080);
    assert_eq!(once.scene.camera, twice.scene.camera);
    assert_eq!(once.viewport, twice.viewport);
}

#[test]
fn resize_leaves_mesh_and_uniforms_alone() {
    let mut stage = Stage::new(Viewport::new(1024, 768), SceneConfig::default());
    let radius = stage.scene.group.mesh.geometry.radius;
    let uniforms = stage.uniforms.clone();
    stage.resize(640, 480);
    assert_eq!(stage.scene.group.mesh.geometry.radius, radius);
    assert_eq!(stage.uniforms, uniforms);
    assert_eq!(stage.scene.camera.distance, camera_distance(480, 45.0));
}

#[test]
fn sphere_radius_follows_initial_height() {
    let stage = Stage::new(Viewport::new(1000, 500), SceneConfig::default());
    assert_eq!(stage.scene.group.mesh.geometry.radius, 200.0);
    assert_eq!(stage.scene.group.mesh.geometry.detail, 24);
}
