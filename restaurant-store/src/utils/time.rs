//! Time helpers. Everything persisted is Unix millis (`i64`).

/// Current time in Unix millis
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
