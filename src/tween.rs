//! Minimal tweening: a value moving from `from` to `to` over a fixed duration
//! along a circular ease-in-out curve.

use glam::Vec3;

/// Circular ease-in-out on `p` in `0..=1`.
pub fn circ_in_out(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.5 {
        (1.0 - (1.0 - (2.0 * p).powi(2)).sqrt()) / 2.0
    } else {
        ((1.0 - (2.0 * p - 2.0).powi(2)).sqrt() + 1.0) / 2.0
    }
}

pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec3::lerp(self, to, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    /// Seconds.
    pub duration: f32,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self { from, to, duration }
    }

    /// Value after `elapsed` seconds. Returns `to` exactly once the duration
    /// has passed.
    pub fn sample(&self, elapsed: f32) -> T {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.to;
        }
        self.from.lerp(self.to, circ_in_out(elapsed / self.duration))
    }

    pub fn is_done(&self, elapsed: f32) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints_and_midpoint() {
        assert_eq!(circ_in_out(0.0), 0.0);
        assert_eq!(circ_in_out(0.5), 0.5);
        assert_eq!(circ_in_out(1.0), 1.0);
        assert!(circ_in_out(0.25) < 0.25);
        assert!(circ_in_out(0.75) > 0.75);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = circ_in_out(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn sample_lands_on_target() {
        let t = Tween::new(0.1_f32, 0.3, 0.8);
        assert_eq!(t.sample(0.0), 0.1);
        assert_eq!(t.sample(0.8), 0.3);
        assert_eq!(t.sample(5.0), 0.3);
        assert!(!t.is_done(0.79));
    }
}
