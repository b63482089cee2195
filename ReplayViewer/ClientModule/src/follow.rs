//! # Camera Follow Point
//!
//! A follow point that trails the ball with critically damped smoothing.
//! The camera itself (movement, look-at) lives outside the engine; it only
//! reads `BallFollower::position`.

use replay_shared::types::Vector3;

/// Smallest smoothing time accepted, avoids dividing by zero
const MIN_SMOOTH_TIME: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallFollower {
    position: Vector3,
    velocity: Vector3,
    smooth_time: f32,
}

impl BallFollower {
    pub fn new(smooth_time: f32) -> Self {
        Self {
            position: Vector3::zero(),
            velocity: Vector3::zero(),
            smooth_time: smooth_time.max(MIN_SMOOTH_TIME),
        }
    }

    /// Move the follow point toward `target` over `dt` seconds
    pub fn update(&mut self, target: Vector3, dt: f32) -> Vector3 {
        if dt <= 0.0 {
            return self.position;
        }
        let (x, vx) = smooth_damp(self.position.x, target.x, self.velocity.x, self.smooth_time, dt);
        let (y, vy) = smooth_damp(self.position.y, target.y, self.velocity.y, self.smooth_time, dt);
        let (z, vz) = smooth_damp(self.position.z, target.z, self.velocity.z, self.smooth_time, dt);
        self.position = Vector3::new(x, y, z);
        self.velocity = Vector3::new(vx, vy, vz);
        self.position
    }

    /// Jump to `position` and stop
    pub fn reset(&mut self, position: Vector3) {
        self.position = position;
        self.velocity = Vector3::zero();
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }
}

/// One axis of a critically damped spring. Returns the new value and velocity.
fn smooth_damp(current: f32, target: f32, velocity: f32, smooth_time: f32, dt: f32) -> (f32, f32) {
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (velocity + omega * change) * dt;
    let mut new_velocity = (velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Never overshoot the target
    if (target - current > 0.0) == (output > target) {
        output = target;
        new_velocity = 0.0;
    }
    (output, new_velocity)
}
