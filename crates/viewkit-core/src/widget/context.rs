//! Per-frame context handed to widgets during `update`.

use std::time::Duration;

use kurbo::Point;

use crate::engagement::EngagementArbiter;
use crate::input::InputState;

/// Frame timing supplied by the host loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Time since the host started.
    pub total: Duration,
    /// Time since the previous frame.
    pub delta: Duration,
}

impl FrameTime {
    /// Advance by `delta`.
    pub fn advance(self, delta: Duration) -> Self {
        Self {
            total: self.total + delta,
            delta,
        }
    }
}

/// Everything a widget may read or mutate while updating.
pub struct FrameContext<'a> {
    pub time: FrameTime,
    pub input: &'a InputState,
    pub arbiter: &'a mut EngagementArbiter,
}

impl<'a> FrameContext<'a> {
    pub fn new(time: FrameTime, input: &'a InputState, arbiter: &'a mut EngagementArbiter) -> Self {
        Self {
            time,
            input,
            arbiter,
        }
    }

    /// Current pointer position.
    pub fn pointer(&self) -> Point {
        self.input.pointer_position
    }
}
