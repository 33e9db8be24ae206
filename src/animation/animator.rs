// SPDX-License-Identifier: MPL-2.0
//! Sequential animator driven by an external clock.

use super::{Interpolator, Property, Tween};
use std::time::{Duration, Instant};

/// Lifecycle of an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Running,
    Ended,
    Cancelled,
}

/// Lifecycle notification emitted by an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    Started,
    Ended,
    Cancelled,
}

/// A property value to apply to the animated view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub property: Property,
    pub value: f32,
}

/// Output of a single clock step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tick {
    /// Values to apply, in order. Stages crossed since the last step
    /// contribute their final value before the active stage's value.
    pub frames: Vec<Frame>,
    pub event: Option<AnimationEvent>,
}

/// Plays a list of tweens one after another.
///
/// The interpolator is shared by every stage and applied to each stage's
/// own elapsed fraction.
#[derive(Debug, Clone)]
pub struct Animator {
    stages: Vec<Tween>,
    interpolator: Interpolator,
    status: Status,
    started_at: Option<Instant>,
    /// Index of the active stage.
    stage: usize,
    /// Start of the active stage relative to `started_at`.
    stage_offset: Duration,
}

impl Animator {
    /// Creates an animator that plays `stages` sequentially.
    pub fn sequential(stages: impl IntoIterator<Item = Tween>, interpolator: Interpolator) -> Self {
        Self {
            stages: stages.into_iter().collect(),
            interpolator,
            status: Status::Idle,
            started_at: None,
            stage: 0,
            stage_offset: Duration::ZERO,
        }
    }

    /// Creates an animator with a single tween.
    #[must_use]
    pub fn single(tween: Tween, interpolator: Interpolator) -> Self {
        Self::sequential([tween], interpolator)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    #[must_use]
    pub fn interpolator(&self) -> Interpolator {
        self.interpolator
    }

    #[must_use]
    pub fn stages(&self) -> &[Tween] {
        &self.stages
    }

    /// Index of the active stage while running.
    #[must_use]
    pub fn current_stage(&self) -> Option<usize> {
        self.is_running().then_some(self.stage)
    }

    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.stages.iter().map(|stage| stage.duration).sum()
    }

    /// Starts the animation at `now`.
    ///
    /// Emits [`AnimationEvent::Started`] and the first stage's initial value.
    /// Does nothing unless the animator is idle. Completion is reported by the
    /// next call to [`Animator::advance`], even for an empty timeline.
    pub fn start(&mut self, now: Instant) -> Tick {
        if self.status != Status::Idle {
            return Tick::default();
        }

        self.status = Status::Running;
        self.started_at = Some(now);
        self.stage = 0;
        self.stage_offset = Duration::ZERO;

        let frames = self
            .stages
            .first()
            .map(|first| Frame {
                property: first.property,
                value: first.value_at(self.interpolator.interpolate(0.0)),
            })
            .into_iter()
            .collect();

        Tick {
            frames,
            event: Some(AnimationEvent::Started),
        }
    }

    /// Advances the animation to `now`.
    pub fn advance(&mut self, now: Instant) -> Tick {
        let Some(started_at) = self.started_at else {
            return Tick::default();
        };
        if self.status != Status::Running {
            return Tick::default();
        }

        let elapsed = now.saturating_duration_since(started_at);
        let mut frames = Vec::new();

        while let Some(stage) = self.stages.get(self.stage) {
            let stage_end = self.stage_offset + stage.duration;
            if elapsed < stage_end {
                break;
            }
            frames.push(Frame {
                property: stage.property,
                value: stage.to,
            });
            self.stage_offset = stage_end;
            self.stage += 1;
        }

        match self.stages.get(self.stage) {
            Some(stage) => {
                let fraction = stage.fraction(elapsed - self.stage_offset);
                frames.push(Frame {
                    property: stage.property,
                    value: stage.value_at(self.interpolator.interpolate(fraction)),
                });
                Tick {
                    frames,
                    event: None,
                }
            }
            None => {
                self.status = Status::Ended;
                Tick {
                    frames,
                    event: Some(AnimationEvent::Ended),
                }
            }
        }
    }

    /// Cancels a running animation.
    ///
    /// Returns [`AnimationEvent::Cancelled`] only if the animation was running.
    pub fn cancel(&mut self) -> Option<AnimationEvent> {
        if self.status == Status::Running {
            self.status = Status::Cancelled;
            Some(AnimationEvent::Cancelled)
        } else {
            None
        }
    }
}
