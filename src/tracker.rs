use chrono::{DateTime, Local, NaiveTime};
use std::fmt;

/// Minimum sleep duration considered sufficient (7 hours)
pub const SUFFICIENT_SLEEP_MINUTES: i64 = 420;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Enough,
    TooLittle,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Enough => write!(f, "Great job! You got enough sleep."),
            Verdict::TooLittle => write!(f, "You need more sleep."),
        }
    }
}

/// Result of stopping a session, captured at stop time so presentation never
/// has to re-read tracker state that has already been cleared.
#[derive(Clone, Debug, PartialEq)]
pub struct SleepSummary {
    pub minutes: i64,
    pub verdict: Verdict,
}

impl SleepSummary {
    pub fn from_minutes(minutes: i64) -> Self {
        let verdict = if minutes >= SUFFICIENT_SLEEP_MINUTES {
            Verdict::Enough
        } else {
            Verdict::TooLittle
        };
        Self { minutes, verdict }
    }

    pub fn message(&self) -> String {
        format!(
            "You have slept for {} minutes. {}",
            self.minutes, self.verdict
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    Started,
    Stopped(SleepSummary),
}

/// represents the sleep session being tracked for the user
#[derive(Debug, Default)]
pub struct Tracker {
    started_at: Option<DateTime<Local>>,
    alarm_time: Option<NaiveTime>,
    session_seq: u64,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between idle and tracking. Starting records `now` and bumps the
    /// session sequence; stopping clears the start instant and returns the
    /// computed summary (whole minutes, floored).
    pub fn toggle_at(&mut self, now: DateTime<Local>) -> ToggleOutcome {
        match self.started_at.take() {
            Some(start) => {
                let minutes = (now - start).num_minutes();
                ToggleOutcome::Stopped(SleepSummary::from_minutes(minutes))
            }
            None => {
                self.session_seq += 1;
                self.started_at = Some(now);
                ToggleOutcome::Started
            }
        }
    }

    pub fn toggle(&mut self) -> ToggleOutcome {
        self.toggle_at(Local::now())
    }

    pub fn is_tracking(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    /// Sequence number of the current (or most recent) session. The watchdog
    /// stores this when armed so a stale fire can be told apart from a live one.
    pub fn seq(&self) -> u64 {
        self.session_seq
    }

    pub fn set_alarm(&mut self, time: NaiveTime) {
        self.alarm_time = Some(time);
    }

    /// Display-only alarm value; nothing is scheduled off it.
    pub fn alarm(&self) -> Option<NaiveTime> {
        self.alarm_time
    }
}
