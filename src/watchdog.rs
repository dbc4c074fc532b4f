use chrono::{DateTime, Duration, Local};

/// Delay after which an untouched session is auto-stopped
pub const INACTIVITY_WINDOW_SECS: i64 = 60;

/// Auto-stop timer for an active session. Driven by the event loop's ticks
/// rather than a separate thread: `arm` records a deadline and the sequence
/// of the session it guards, `poll` reports the deadline passing at most once.
///
/// The caller must check the returned sequence against the live session
/// before acting on a fire, so a watchdog armed for an older session can
/// never stop a newer one.
#[derive(Debug, Default)]
pub struct Watchdog {
    deadline: Option<DateTime<Local>>,
    armed_for: u64,
}

impl Watchdog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) for the session identified by `seq`.
    pub fn arm(&mut self, now: DateTime<Local>, seq: u64) {
        self.deadline = Some(now + Duration::seconds(INACTIVITY_WINDOW_SECS));
        self.armed_for = seq;
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// If armed and the deadline has passed, disarm and return the sequence
    /// this watchdog was armed for. Subsequent polls return None until re-armed.
    pub fn poll(&mut self, now: DateTime<Local>) -> Option<u64> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.armed_for)
            }
            _ => None,
        }
    }
}
