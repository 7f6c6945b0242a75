//! The time the process started.
use std::time::SystemTime;

lazy_static! {
    /// Captured on first use, which is at application bootstrap.
    pub static ref TIME_AT_APP_START: SystemTime = SystemTime::now();
}
