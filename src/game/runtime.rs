//! Loop runtime
//!
//! The phase state machine that gates updates, and the frame limiter
//! that holds the loop to its fixed rate.

use macroquad::time::get_time;

/// Where the loop is in its lifecycle.
///
/// `Ended` closes the update gate while the scene keeps rendering;
/// `Stopped` exits the loop after the in-flight frame presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Input and robot motion are applied every frame
    #[default]
    Running,
    /// Frozen but still rendering. No gameplay path sets this yet; the
    /// trigger is undecided.
    Ended,
    /// A quit request was observed; terminal
    Stopped,
}

impl Phase {
    /// Does the update half of the frame run?
    pub fn updates_enabled(&self) -> bool {
        match self {
            Phase::Running => true,
            Phase::Ended | Phase::Stopped => false,
        }
    }

    pub fn is_stopped(&self) -> bool {
        *self == Phase::Stopped
    }

    /// Freeze the scene. Only meaningful while running.
    #[allow(dead_code)]
    pub fn end(&mut self) {
        if *self == Phase::Running {
            *self = Phase::Ended;
        }
    }

    /// Record a quit request. Terminal from any phase.
    pub fn stop(&mut self) {
        *self = Phase::Stopped;
    }
}

/// Holds the loop to a fixed frame rate.
///
/// Native builds sleep for the bulk of the remaining slice and spin-wait
/// the last couple of milliseconds for precision; WASM busy-waits and
/// lets the browser pace the rest.
pub struct FrameLimiter {
    target_frame_time: f64,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            target_frame_time: 1.0 / fps as f64,
        }
    }

    /// Block until the frame that began at `frame_start` (macroquad
    /// `get_time` seconds) has consumed its full time slice.
    pub fn pace(&self, frame_start: f64) {
        let elapsed = get_time() - frame_start;
        let remaining = self.target_frame_time - elapsed;

        if remaining > 0.0 {
            #[cfg(not(target_arch = "wasm32"))]
            {
                let spin_margin = 0.002; // 2ms
                while get_time() - frame_start + spin_margin < self.target_frame_time {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                // Spin-wait for precise timing
                while get_time() - frame_start < self.target_frame_time {
                    std::hint::spin_loop();
                }
            }
            #[cfg(target_arch = "wasm32")]
            {
                while get_time() - frame_start < self.target_frame_time {
                    // Busy wait - browser will handle frame pacing
                }
            }
        }
    }
}
