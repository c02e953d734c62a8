use super::scheduler::MINUTES_PER_DAY;

/// Human-readable form of an interval given in minutes.
pub fn interval_display(minutes: i32) -> String {
    if minutes < 60 {
        count(minutes, "minute")
    } else if minutes < MINUTES_PER_DAY {
        count(minutes / 60, "hour")
    } else {
        count(minutes / MINUTES_PER_DAY, "day")
    }
}

fn count(n: i32, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
