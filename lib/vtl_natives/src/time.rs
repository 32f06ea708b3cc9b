use chrono::{Local, Timelike};

/// Returns `"The current time is: HH:MM:SS.\n"` for `t`.
pub fn current_time_message(t: &impl Timelike) -> String {
    format!(
        "The current time is: {:02}:{:02}:{:02}.\n",
        t.hour(),
        t.minute(),
        t.second()
    )
}

/// Returns the message for the current local time.
pub fn current_time() -> String {
    let now = Local::now();
    log::debug!("local time: {}", now.to_rfc3339());
    current_time_message(&now)
}
