//! # Hand Transitions
//!
//! Transitions played when a tracked hand stops or resumes tracking. They are
//! driven by the host calling [`HandDrop::update`] once per frame with the
//! current time; there are no coroutines or timers.
//!
//! ## Usage
//!
//! ```rust
//! use glam::{DQuat, DVec3};
//! use hand_transitions::{HandDrop, HandTransition, PalmPose};
//!
//! let start = PalmPose::new(DVec3::ZERO, DQuat::IDENTITY);
//! let mut hand_drop = HandDrop::new(start);
//!
//! hand_drop.hand_finish(PalmPose::new(DVec3::new(0.0, -1.0, 0.0), DQuat::IDENTITY), 10.0);
//! let halfway = hand_drop.update(10.5).unwrap();
//! assert_eq!(halfway.position, DVec3::new(0.0, -0.5, 0.0));
//! ```

use config::constants::GlobalConfig;
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Local position and orientation of a palm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PalmPose {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl PalmPose {
    pub fn new(position: DVec3, rotation: DQuat) -> Self {
        Self { position, rotation }
    }

    /// Component-wise lerp with `t` clamped to `[0, 1]`; rotation uses
    /// normalized quaternion lerp.
    pub fn lerp(self, target: PalmPose, t: f64) -> PalmPose {
        let t = t.clamp(0.0, 1.0);
        PalmPose {
            position: self.position.lerp(target.position, t),
            rotation: self.rotation.lerp(target.rotation, t),
        }
    }
}

/// Hooks a hand model calls when tracking ends or restarts.
pub trait HandTransition {
    /// Tracking was lost; `pose` is where the palm was left.
    fn hand_finish(&mut self, pose: PalmPose, now: f64);

    /// Tracking resumed; any running transition must stop.
    fn hand_reset(&mut self);
}

#[derive(Debug, Clone, Copy)]
struct LerpToStart {
    dropped: PalmPose,
    start_time: f64,
    cancelled: bool,
}

/// Lerps a dropped palm back to the pose it had when the hand was created.
#[derive(Debug, Clone)]
pub struct HandDrop {
    starting: PalmPose,
    duration: f64,
    transition: Option<LerpToStart>,
}

impl HandDrop {
    /// Records the starting pose, using the default drop duration.
    pub fn new(starting: PalmPose) -> Self {
        Self::with_config(starting, &GlobalConfig::default())
    }

    pub fn with_config(starting: PalmPose, config: &GlobalConfig) -> Self {
        Self {
            starting,
            duration: config.hand_drop_duration,
            transition: None,
        }
    }

    #[inline]
    pub fn starting_pose(&self) -> PalmPose {
        self.starting
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// True while a transition is running and not cancelled.
    pub fn is_active(&self) -> bool {
        self.transition.is_some_and(|lerp| !lerp.cancelled)
    }

    /// Advances the transition to `now` and returns the pose to apply.
    ///
    /// Returns `None` when nothing is running. The first call past the end
    /// time returns the starting pose exactly and finishes the transition.
    /// This snap is deliberate: a plain lerp loop would stop at the last
    /// sampled pose, short of the start whenever the final frame lands
    /// before `t = 1`.
    pub fn update(&mut self, now: f64) -> Option<PalmPose> {
        let lerp = self.transition?;
        if lerp.cancelled {
            self.transition = None;
            return None;
        }

        let elapsed = now - lerp.start_time;
        if elapsed > self.duration {
            self.transition = None;
            tracing::debug!("[hand_drop] Returned to starting pose");
            return Some(self.starting);
        }

        let t = elapsed / self.duration;
        tracing::trace!("[hand_drop] t={:.3}", t);
        Some(lerp.dropped.lerp(self.starting, t))
    }
}

impl HandTransition for HandDrop {
    fn hand_finish(&mut self, pose: PalmPose, now: f64) {
        tracing::debug!("[hand_drop] Hand finished, lerping to start over {}s", self.duration);
        self.transition = Some(LerpToStart {
            dropped: pose,
            start_time: now,
            cancelled: false,
        });
    }

    fn hand_reset(&mut self) {
        if let Some(lerp) = &mut self.transition {
            lerp.cancelled = true;
        }
    }
}
