//! Animation driver
//!
//! One spring-backed progress value in [0, 1] — "closedness → openness" —
//! and the pure derivations the renderer consumes: disclosure-icon rotation
//! and the list's vertical scale with its compensating translation. The rest
//! of the widget only ever reads the continuously-interpolated value;
//! [`AnimationDriver::phase`] exists for tests and diagnostics.

use serde::Serialize;
use tapdown_animation::{map_range, AnimatedValue, SchedulerHandle, SpringConfig};

use crate::style::Metrics;

/// Logical disclosure state, with the spring's transient in between
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosurePhase {
    Closed,
    Open,
    Transitioning,
}

/// Drives the open/close progress and its derived presentation values
pub struct AnimationDriver {
    progress: AnimatedValue,
}

impl AnimationDriver {
    /// Starts settled at closed (progress 0)
    pub fn new(scheduler: SchedulerHandle, config: SpringConfig) -> Self {
        Self {
            progress: AnimatedValue::new(scheduler, 0.0, config),
        }
    }

    /// Retarget toward open (1) or closed (0)
    ///
    /// Retargeting mid-flight is the only cancellation mechanism; the spring
    /// keeps its velocity and turns around.
    pub(crate) fn set_open(&mut self, open: bool) {
        self.progress.set_target(if open { 1.0 } else { 0.0 });
    }

    /// The continuous [0, 1] progress value (may overshoot transiently)
    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    /// Whether the current target is the open state
    pub fn target_open(&self) -> bool {
        self.progress.target() > 0.5
    }

    /// Discrete phase derived from target + settledness; diagnostics only
    pub fn phase(&self) -> DisclosurePhase {
        if self.progress.is_animating() {
            DisclosurePhase::Transitioning
        } else if self.target_open() {
            DisclosurePhase::Open
        } else {
            DisclosurePhase::Closed
        }
    }

    /// Disclosure icon rotation: 0deg closed → 180deg open
    pub fn rotation_deg(&self) -> f32 {
        map_range(self.progress(), (0.0, 1.0), (0.0, 180.0))
    }

    /// The list's vertical scale is the progress itself
    pub fn scale_y(&self) -> f32 {
        self.progress()
    }

    /// The list container's transform chain for a given rest height
    pub fn list_placement(&self, height: f32, metrics: &Metrics) -> ListPlacement {
        ListPlacement {
            rest_height: height,
            translate_before: -height / 2.0 + metrics.header_anchor,
            scale_y: self.scale_y(),
            translate_after: height / 2.0 + metrics.list_gap,
        }
    }
}

/// Transform chain for the floating list container
///
/// Applied in order: translate by `translate_before`, scale vertically about
/// the container's center by `scale_y`, translate by `translate_after`. The
/// composition anchors the container's top edge at the header's bottom edge,
/// so the list grows downward from the header instead of out of its own
/// center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ListPlacement {
    pub rest_height: f32,
    pub translate_before: f32,
    pub scale_y: f32,
    pub translate_after: f32,
}

impl ListPlacement {
    /// Net vertical offset of the container's center from its rest position
    pub fn center_offset(&self) -> f32 {
        self.translate_before + self.scale_y * self.translate_after
    }

    /// Height of the container after scaling
    pub fn scaled_height(&self) -> f32 {
        self.scale_y * self.rest_height
    }

    /// Offset of the scaled container's top edge from its rest top
    ///
    /// Evaluates to `header_anchor + list_gap · scale_y`, independent of the
    /// rest height — the invariant that keeps growth anchored at the header.
    pub fn top_edge_offset(&self) -> f32 {
        self.center_offset() + (self.rest_height / 2.0) * (1.0 - self.scale_y)
    }
}
