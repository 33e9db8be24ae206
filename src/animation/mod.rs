// SPDX-License-Identifier: MPL-2.0
//! Minimal timeline primitives for snack bar transitions.
//!
//! The host toolkit owns the clock: callers feed `Instant`s into
//! [`Animator::start`] and [`Animator::advance`] (typically from a periodic
//! Iced `time::every` subscription) and apply the returned [`Frame`]s to
//! their view.
//!
//! Only what a snack bar needs lives here: a handful of easing curves,
//! single-property tweens, and a sequential animator.

mod animator;

pub use animator::{AnimationEvent, Animator, Frame, Status, Tick};

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::time::Duration;

/// Easing curve applied to the elapsed fraction of each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolator {
    Linear,
    /// Starts slow and speeds up (t²).
    Accelerate,
    /// Starts fast and slows down (1 - (1 - t)²).
    Decelerate,
    /// Slow at both ends, fast in the middle (cosine).
    #[default]
    AccelerateDecelerate,
}

impl Interpolator {
    /// Maps an elapsed fraction to an eased fraction. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn interpolate(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Interpolator::Linear => t,
            Interpolator::Accelerate => t * t,
            Interpolator::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Interpolator::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

/// View property a tween writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Vertical offset from the resting bottom edge. Positive moves down.
    TranslationY,
    Alpha,
}

/// Animates one property from `from` to `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub property: Property,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
}

impl Tween {
    #[must_use]
    pub fn new(property: Property, from: f32, to: f32, duration: Duration) -> Self {
        Self {
            property,
            from,
            to,
            duration,
        }
    }

    /// Value at the given eased fraction.
    #[must_use]
    pub fn value_at(&self, eased: f32) -> f32 {
        self.from + (self.to - self.from) * eased
    }

    /// Elapsed fraction of this tween after `elapsed` time.
    ///
    /// Zero-length tweens are always complete.
    #[must_use]
    pub fn fraction(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}
