//! Deferred Corrective Work
//!
//! After mount the grid's geometry may have been measured before the
//! container settled (hidden, mid-transition). The controller schedules a
//! few one-shot corrective passes here and the shell's frame loop drives
//! them by calling `tick` once per frame.
//!
//! Two deferral styles are supported:
//! - `Frames(n)`: run on the n-th frame after scheduling. Use this when the
//!   shell ticks after each completed layout pass.
//! - `After(d)`: run once `d` has elapsed. The fixed-delay fallback.
//!
//! Nothing here sleeps or spawns; tasks only run inside `tick`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// One-shot corrective passes scheduled at mount
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrectiveTask {
    /// Ask observers to re-render from current state
    Rerender,
    /// Tell observers the container may have changed size
    ContainerResize,
    /// Make the surface recompute its geometry
    Relayout,
}

/// When a deferred task becomes due
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferral {
    /// After a fixed delay
    After(Duration),
    /// After this many frame ticks
    Frames(u32),
}

/// Deferrals for each corrective pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CorrectivePlan {
    /// Re-render pass
    pub rerender: Deferral,
    /// Simulated container resize
    pub container_resize: Deferral,
    /// Forced surface relayout
    pub relayout: Deferral,
}

impl Default for CorrectivePlan {
    fn default() -> Self {
        Self::fixed_delay(100, 200, 200)
    }
}

impl CorrectivePlan {
    /// Fixed-delay plan, delays in milliseconds
    pub fn fixed_delay(rerender_ms: u64, resize_ms: u64, relayout_ms: u64) -> Self {
        Self {
            rerender: Deferral::After(Duration::from_millis(rerender_ms)),
            container_resize: Deferral::After(Duration::from_millis(resize_ms)),
            relayout: Deferral::After(Duration::from_millis(relayout_ms)),
        }
    }

    /// After-layout-settle plan: re-render next frame, resize and relayout the one after
    pub fn next_frame() -> Self {
        Self {
            rerender: Deferral::Frames(1),
            container_resize: Deferral::Frames(2),
            relayout: Deferral::Frames(2),
        }
    }

    /// Tasks in scheduling order
    pub fn tasks(&self) -> [(CorrectiveTask, Deferral); 3] {
        [
            (CorrectiveTask::Rerender, self.rerender),
            (CorrectiveTask::ContainerResize, self.container_resize),
            (CorrectiveTask::Relayout, self.relayout),
        ]
    }
}

#[derive(Clone, Copy, Debug)]
enum Due {
    At(Instant),
    Tick(u64),
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    task: CorrectiveTask,
    due: Due,
}

/// Queue of one-shot deferred tasks
#[derive(Debug, Default)]
pub struct DeferredQueue {
    pending: Vec<Pending>,
    ticks: u64,
}

impl DeferredQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` relative to `now`
    pub fn schedule(&mut self, task: CorrectiveTask, deferral: Deferral, now: Instant) {
        let due = match deferral {
            Deferral::After(delay) => Due::At(now + delay),
            Deferral::Frames(frames) => Due::Tick(self.ticks + u64::from(frames)),
        };
        self.pending.push(Pending { task, due });
    }

    /// Schedule every task of `plan`
    pub fn schedule_plan(&mut self, plan: &CorrectivePlan, now: Instant) {
        for (task, deferral) in plan.tasks() {
            self.schedule(task, deferral, now);
        }
    }

    /// Advance one frame and take every task now due, in scheduling order
    pub fn tick(&mut self, now: Instant) -> Vec<CorrectiveTask> {
        self.ticks += 1;
        let ticks = self.ticks;
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|pending| match pending.due {
                Due::At(at) => at <= now,
                Due::Tick(tick) => tick <= ticks,
            });
        self.pending = waiting;
        due.into_iter().map(|pending| pending.task).collect()
    }

    /// Number of tasks still waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is waiting
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
