// Journal entries plus the two journal agents:
// the reflective-prompt generator and the entry reflector.

pub mod handlers;
pub mod prompt_agent;
pub mod prompts;
pub mod reflector;
