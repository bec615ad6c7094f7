// Mood check-ins, history and the weekly trend.

pub mod handlers;
pub mod trend;
