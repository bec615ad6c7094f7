// Support agents: motivational affirmations and CBT-style cognitive support.
// Both degrade to fixed content when the model is unavailable.

pub mod affirmation;
pub mod cognitive;
pub mod handlers;
pub mod prompts;
