use chrono::{Local, Timelike};

/// Map an hour of day (0-23) to a greeting. Pure; the app evaluates it once
/// per screen mount and caches the result.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn current_greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}
