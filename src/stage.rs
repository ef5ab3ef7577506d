//! The explicitly owned page context: scene, uniforms, animator and clock.
//!
//! The browser frame loop calls [`Stage::tick`] once per animation frame and
//! then draws whatever the stage holds. Navigation hooks call
//! [`Stage::run_transition`], resize events call [`Stage::resize`]. All three
//! run on the same thread, so a mutation is visible to the next draw.

use std::f32::consts::TAU;

use crate::animator::{Animator, Pose, Transition};
use crate::config::SceneConfig;
use crate::scene::Scene;
use crate::uniforms::UniformSet;
use crate::viewport::Viewport;

/// Elapsed time since the first sampled frame, in seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last_ms: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    pub elapsed: f32,
    pub delta: f32,
}

impl FrameClock {
    /// Samples the clock at `now_ms`. Timestamps that go backwards are held
    /// at the previous value so elapsed time never decreases.
    pub fn sample(&mut self, now_ms: f64) -> FrameTime {
        let start = *self.start_ms.get_or_insert(now_ms);
        let last = self.last_ms.unwrap_or(start);
        let now = now_ms.max(last);
        self.last_ms = Some(now);
        FrameTime {
            elapsed: ((now - start) / 1000.0) as f32,
            delta: ((now - last) / 1000.0) as f32,
        }
    }
}

#[derive(Debug)]
pub struct Stage {
    pub config: SceneConfig,
    pub viewport: Viewport,
    pub scene: Scene,
    pub uniforms: UniformSet,
    pub animator: Animator,
    /// Passive spin flag.
    pub spinning: bool,
    clock: FrameClock,
}

impl Stage {
    pub fn new(viewport: Viewport, config: SceneConfig) -> Self {
        let scene = Scene::new(viewport, &config);
        let uniforms = UniformSet::new(
            config.speed,
            config.wave,
            config.frequency,
            config.color1,
            config.color2,
        );
        log::info!(
            "stage {}x{} camera distance {:.1}",
            viewport.width,
            viewport.height,
            scene.camera.distance
        );
        Self {
            spinning: config.spinning,
            config,
            viewport,
            scene,
            uniforms,
            animator: Animator::new(),
            clock: FrameClock::default(),
        }
    }

    /// Current values of everything a transition animates.
    pub fn pose(&self) -> Pose {
        Pose {
            rotation_y: self.scene.group.rotation_y,
            position: self.scene.group.position,
            wave: self.uniforms.wave,
            frequency: self.uniforms.frequency,
        }
    }

    fn apply(&mut self, pose: Pose) {
        self.scene.group.rotation_y = pose.rotation_y;
        self.scene.group.position = pose.position;
        self.uniforms.wave = pose.wave;
        self.uniforms.frequency = pose.frequency;
    }

    /// One frame of state: time uniform, animator step, passive spin.
    pub fn tick(&mut self, now_ms: f64) -> FrameTime {
        let time = self.clock.sample(now_ms);
        self.uniforms.time = time.elapsed;
        if let Some(pose) = self.animator.advance(time.delta) {
            self.apply(pose);
        }
        if self.spinning {
            // Kept in [0, TAU) so the step never drops below f32 resolution.
            let spin = self.scene.group.mesh.spin - self.config.spin_step;
            self.scene.group.mesh.spin = spin.rem_euclid(TAU);
        }
        time
    }

    /// Starts `transition` from the current pose. Colors, wireframe and the
    /// spin flag switch immediately; the rest follows the timeline.
    pub fn run_transition(&mut self, transition: Transition) {
        let target = transition.target(self.viewport);
        log::info!("transition {}", transition.name());
        self.uniforms.color1 = target.color1;
        self.uniforms.color2 = target.color2;
        self.scene.group.mesh.wireframe = true;
        self.spinning = target.spinning;
        let current = self.pose();
        self.animator.start(transition, current, &target);
    }

    /// Re-derives the camera from a new window size. Mesh and uniforms are
    /// left alone.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.scene.camera.fit(self.viewport);
        log::debug!(
            "resize {}x{} camera distance {:.1}",
            self.viewport.width,
            self.viewport.height,
            self.scene.camera.distance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero() {
        let mut clock = FrameClock::default();
        let first = clock.sample(5_000.0);
        assert_eq!(first, FrameTime { elapsed: 0.0, delta: 0.0 });
        let second = clock.sample(5_016.0);
        assert!((second.elapsed - 0.016).abs() < 1e-6);
        assert!((second.delta - 0.016).abs() < 1e-6);
    }

    #[test]
    fn clock_ignores_backwards_timestamps() {
        let mut clock = FrameClock::default();
        clock.sample(100.0);
        clock.sample(600.0);
        let t = clock.sample(300.0);
        assert_eq!(t.elapsed, 0.5);
        assert_eq!(t.delta, 0.0);
    }
}
