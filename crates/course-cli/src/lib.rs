//! CLI library components for the course marks report.

pub mod logging;
pub mod number;
pub mod prompt;
pub mod report;
pub mod session;

pub use session::{OutputStyle, SessionOptions, SessionOutcome, run_session};
