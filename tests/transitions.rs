use std::f32::consts::TAU;

use glam::Vec3;
use wave_backdrop::navigation::PageView;
use wave_backdrop::uniforms::Color;
use wave_backdrop::{BackdropError, SceneConfig, Stage, Transition, Viewport};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn stage() -> Stage {
    Stage::new(Viewport::new(1200, 800), SceneConfig::default())
}

/// Ticks `frames` frames starting at `start_ms`; returns the next timestamp.
fn run_frames(stage: &mut Stage, start_ms: f64, frames: usize) -> f64 {
    let mut now = start_ms;
    for _ in 0..frames {
        stage.tick(now);
        now += FRAME_MS;
    }
    now
}

#[test]
fn time_uniform_tracks_clock() {
    let mut stage = stage();
    let mut prev = -1.0;
    for i in 0..120 {
        let now = 2_000.0 + i as f64 * FRAME_MS;
        stage.tick(now);
        let expected = ((now - 2_000.0) / 1000.0) as f32;
        assert!((stage.uniforms.time - expected).abs() < 1e-4);
        assert!(stage.uniforms.time >= prev);
        prev = stage.uniforms.time;
    }
}

#[test]
fn passive_spin_only_while_flag_set() {
    let mut stage = stage();
    run_frames(&mut stage, 0.0, 10);
    assert!((stage.scene.group.mesh.spin - (TAU - 0.01)).abs() < 1e-4);

    stage.run_transition(Transition::Page3);
    let spin = stage.scene.group.mesh.spin;
    run_frames(&mut stage, 1_000.0, 10);
    assert_eq!(stage.scene.group.mesh.spin, spin);
}

#[test]
fn passive_spin_keeps_moving_after_long_runs() {
    let mut stage = stage();
    stage.scene.group.mesh.spin = -32768.0;
    stage.tick(0.0);
    let start = stage.scene.group.mesh.spin;
    assert!((0.0..TAU).contains(&start));

    run_frames(&mut stage, FRAME_MS, 600);
    let spin = stage.scene.group.mesh.spin;
    assert!((0.0..TAU).contains(&spin));
    let turned = (start - spin).rem_euclid(TAU);
    assert!((turned - 0.6).abs() < 1e-3, "turned {turned}");
}

#[test]
fn home_end_state() {
    let mut stage = stage();
    stage.run_transition(Transition::Page2);
    let now = run_frames(&mut stage, 0.0, 30);
    stage.run_transition(Transition::Home);
    run_frames(&mut stage, now, 60);

    assert!(stage.animator.is_idle());
    assert_eq!(stage.scene.group.rotation_y, 0.0);
    assert_eq!(stage.scene.group.position, Vec3::new(240.0, 0.0, 360.0));
    assert_eq!(stage.uniforms.wave, 0.0);
    assert_eq!(stage.uniforms.frequency, 0.05);
    assert_eq!(stage.uniforms.color1, Color::from_hex(0xd43f8c));
    assert_eq!(stage.uniforms.color2, Color::from_hex(0x014fc4));
    assert!(stage.scene.group.mesh.wireframe);
    assert!(stage.spinning);
}

#[test]
fn page2_end_state() {
    let mut stage = stage();
    stage.run_transition(Transition::Page2);
    run_frames(&mut stage, 0.0, 60);

    assert_eq!(stage.scene.group.rotation_y, 2.0 * TAU);
    assert_eq!(stage.scene.group.position, Vec3::new(0.0, -320.0, 100.0));
    assert_eq!(stage.uniforms.wave, 40.0);
    assert_eq!(stage.uniforms.frequency, 0.05);
    assert_eq!(stage.uniforms.color1, Color::from_hex(0xf83600));
    assert_eq!(stage.uniforms.color2, Color::from_hex(0xf9d423));
    assert!(!stage.spinning);
}

#[test]
fn page3_end_state() {
    let mut stage = stage();
    stage.run_transition(Transition::Page3);
    run_frames(&mut stage, 0.0, 60);

    assert_eq!(stage.scene.group.rotation_y, 0.0);
    assert_eq!(stage.scene.group.position, Vec3::ZERO);
    assert_eq!(stage.uniforms.wave, 10.0);
    assert_eq!(stage.uniforms.frequency, 0.005);
    assert_eq!(stage.uniforms.color1, Color::from_hex(0xf4d03f));
    assert_eq!(stage.uniforms.color2, Color::from_hex(0x16a085));
}

#[test]
fn colors_switch_before_first_frame() {
    let mut stage = stage();
    stage.run_transition(Transition::Page2);
    assert_eq!(stage.uniforms.color1, Color::from_hex(0xf83600));
    assert!(stage.scene.group.mesh.wireframe);
    assert!(!stage.spinning);
    // Nothing animated has moved yet.
    assert_eq!(stage.uniforms.wave, 0.0);
}

#[test]
fn interrupt_restarts_from_current_values() {
    let mut stage = stage();
    stage.run_transition(Transition::Home);
    let now = run_frames(&mut stage, 0.0, 20);
    let mid = stage.pose();
    assert_ne!(mid.frequency, 0.05);
    assert_ne!(mid.frequency, 0.0);

    stage.run_transition(Transition::Page2);
    assert_eq!(stage.pose(), mid);
    assert_eq!(stage.animator.active(), Some(Transition::Page2));

    run_frames(&mut stage, now, 60);
    let target = Transition::Page2.target(stage.viewport);
    assert_eq!(stage.pose(), target.pose);
}

#[test]
fn target_uses_viewport_at_call_time() {
    let mut stage = stage();
    stage.resize(2000, 1000);
    stage.run_transition(Transition::Home);
    run_frames(&mut stage, 0.0, 60);
    assert_eq!(stage.scene.group.position, Vec3::new(400.0, 0.0, 600.0));
}

#[test]
fn page_views() {
    let home = PageView::for_namespace("home").unwrap();
    assert_eq!(home.transition, Transition::Home);
    assert_eq!(home.body_class, "page-home");
    assert_eq!(PageView::for_namespace("page2").unwrap().body_class, "page-2");
    assert_eq!(PageView::for_namespace("page3").unwrap().body_class, "page-3");
    assert!(matches!(
        PageView::for_namespace("contact"),
        Err(BackdropError::UnknownPage(ns)) if ns == "contact"
    ));
}
