//! Page transitions: timed moves of the group transform and the wave uniforms.
//!
//! A transition is four tracks starting together, rotation, position, wave
//! amplitude and frequency, each with its own duration. Starting a transition
//! while another runs discards the old tracks and restarts from whatever
//! values were current at that moment.

use std::f32::consts::TAU;
use std::str::FromStr;

use glam::Vec3;

use crate::error::BackdropError;
use crate::tween::Tween;
use crate::uniforms::Color;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Sphere pushed to the right and toward the camera, calm surface.
    Home,
    /// Sphere sunk below the fold with two full turns and strong waves.
    Page2,
    /// Sphere centered with a slow ripple.
    Page3,
}

impl Transition {
    pub const ALL: [Transition; 3] = [Transition::Home, Transition::Page2, Transition::Page3];

    pub fn name(self) -> &'static str {
        match self {
            Transition::Home => "home",
            Transition::Page2 => "page2",
            Transition::Page3 => "page3",
        }
    }

    /// Fixed end state for this transition, resolved against the viewport at
    /// call time.
    pub fn target(self, viewport: Viewport) -> Target {
        let w = viewport.width as f32;
        let h = viewport.height as f32;
        match self {
            Transition::Home => Target {
                pose: Pose {
                    rotation_y: 0.0,
                    position: Vec3::new(w * 0.2, 0.0, w * 0.3),
                    wave: 0.0,
                    frequency: 0.05,
                },
                rotation_duration: 0.6,
                duration: 0.8,
                color1: Color::from_hex(0xd43f8c),
                color2: Color::from_hex(0x014fc4),
                spinning: true,
            },
            Transition::Page2 => Target {
                pose: Pose {
                    rotation_y: 2.0 * TAU,
                    position: Vec3::new(0.0, -h * 0.4, 100.0),
                    wave: 40.0,
                    frequency: 0.05,
                },
                rotation_duration: 0.6,
                duration: 0.8,
                color1: Color::from_hex(0xf83600),
                color2: Color::from_hex(0xf9d423),
                spinning: false,
            },
            Transition::Page3 => Target {
                pose: Pose {
                    rotation_y: 0.0,
                    position: Vec3::ZERO,
                    wave: 10.0,
                    frequency: 0.005,
                },
                rotation_duration: 0.8,
                duration: 0.8,
                color1: Color::from_hex(0xf4d03f),
                color2: Color::from_hex(0x16a085),
                spinning: false,
            },
        }
    }
}

impl FromStr for Transition {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transition::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| BackdropError::UnknownPage(s.to_owned()))
    }
}

/// The animated part of the scene state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub rotation_y: f32,
    pub position: Vec3,
    pub wave: f32,
    pub frequency: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub pose: Pose,
    /// Seconds for the rotation track.
    pub rotation_duration: f32,
    /// Seconds for the position, wave and frequency tracks.
    pub duration: f32,
    pub color1: Color,
    pub color2: Color,
    /// Whether the passive spin runs once this transition is requested.
    pub spinning: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    rotation: Tween<f32>,
    position: Tween<Vec3>,
    wave: Tween<f32>,
    frequency: Tween<f32>,
}

impl Timeline {
    pub fn new(from: Pose, target: &Target) -> Self {
        let to = target.pose;
        Self {
            rotation: Tween::new(from.rotation_y, to.rotation_y, target.rotation_duration),
            position: Tween::new(from.position, to.position, target.duration),
            wave: Tween::new(from.wave, to.wave, target.duration),
            frequency: Tween::new(from.frequency, to.frequency, target.duration),
        }
    }

    /// True once every track has reached its end value.
    pub fn is_done(&self, elapsed: f32) -> bool {
        self.rotation.is_done(elapsed)
            && self.position.is_done(elapsed)
            && self.wave.is_done(elapsed)
            && self.frequency.is_done(elapsed)
    }

    pub fn sample(&self, elapsed: f32) -> Pose {
        Pose {
            rotation_y: self.rotation.sample(elapsed),
            position: self.position.sample(elapsed),
            wave: self.wave.sample(elapsed),
            frequency: self.frequency.sample(elapsed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub enum AnimatorState {
    #[default]
    Idle,
    Transitioning {
        target: Transition,
        elapsed: f32,
        timeline: Timeline,
    },
}

#[derive(Debug, Default)]
pub struct Animator {
    state: AnimatorState,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, AnimatorState::Idle)
    }

    /// The transition currently running, if any.
    pub fn active(&self) -> Option<Transition> {
        match self.state {
            AnimatorState::Idle => None,
            AnimatorState::Transitioning { target, .. } => Some(target),
        }
    }

    /// Replaces any running timeline with a fresh one starting at `current`.
    pub fn start(&mut self, transition: Transition, current: Pose, target: &Target) {
        if let Some(previous) = self.active() {
            log::debug!("interrupting {} with {}", previous.name(), transition.name());
        }
        self.state = AnimatorState::Transitioning {
            target: transition,
            elapsed: 0.0,
            timeline: Timeline::new(current, target),
        };
    }

    /// Moves the running timeline forward by `dt` seconds and returns the pose
    /// to apply. Returns `None` when idle.
    pub fn advance(&mut self, dt: f32) -> Option<Pose> {
        let AnimatorState::Transitioning {
            target,
            elapsed,
            timeline,
        } = &mut self.state
        else {
            return None;
        };
        *elapsed += dt.max(0.0);
        let pose = timeline.sample(*elapsed);
        if timeline.is_done(*elapsed) {
            log::debug!("transition {} complete", target.name());
            self.state = AnimatorState::Idle;
        }
        Some(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest() -> Pose {
        Pose {
            rotation_y: 0.0,
            position: Vec3::ZERO,
            wave: 0.0,
            frequency: 0.0,
        }
    }

    #[test]
    fn namespaces_parse() {
        assert_eq!("home".parse::<Transition>().unwrap(), Transition::Home);
        assert_eq!("page3".parse::<Transition>().unwrap(), Transition::Page3);
        assert!(matches!(
            "about".parse::<Transition>(),
            Err(BackdropError::UnknownPage(_))
        ));
    }

    #[test]
    fn idle_advance_is_none() {
        let mut animator = Animator::new();
        assert!(animator.advance(0.016).is_none());
    }

    #[test]
    fn rotation_track_finishes_before_the_rest() {
        let target = Transition::Page2.target(Viewport::new(1200, 800));
        let mut animator = Animator::new();
        animator.start(Transition::Page2, rest(), &target);
        let pose = animator.advance(0.7).unwrap();
        assert_eq!(pose.rotation_y, 2.0 * TAU);
        assert_ne!(pose.wave, 40.0);
        assert_eq!(animator.active(), Some(Transition::Page2));
    }

    #[test]
    fn becomes_idle_after_longest_track() {
        let target = Transition::Page3.target(Viewport::new(1200, 800));
        let mut animator = Animator::new();
        animator.start(Transition::Page3, rest(), &target);
        animator.advance(0.5);
        assert!(!animator.is_idle());
        assert_eq!(animator.advance(0.5).unwrap(), target.pose);
        assert!(animator.is_idle());
    }
}
