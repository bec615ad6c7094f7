//! Coordinator: keyword dispatch for free-text requests.
//!
//! Route-bound agents are dispatched by the axum router directly; this module
//! only handles `/ask`, where the agent is chosen from the message itself.
//!
//! Priority is fixed: graduation, then job search, then grad school. The first
//! keyword found wins, so "job" beats "grad school" when both appear.

use tracing::{info, warn};

use crate::coordinator::prompts::{GRADUATION_TEMPLATE, GRAD_SCHOOL_TEMPLATE, JOB_SEARCH_TEMPLATE};
use crate::llm_client::prompts::{fill, SUPPORTIVE_TONE};
use crate::llm_client::Generator;

pub mod handlers;
pub mod prompts;

pub const UNRECOGNIZED_RESPONSE: &str = "Sorry, I couldn't understand your request.";

pub const ADVISOR_FALLBACK: &str =
    "I couldn't put together advice right now. Please try again in a little while.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisor {
    Graduation,
    JobSearch,
    GradSchool,
}

/// Keywords in priority order.
const ROUTES: &[(&str, Advisor)] = &[
    ("graduate", Advisor::Graduation),
    ("job", Advisor::JobSearch),
    ("grad school", Advisor::GradSchool),
];

impl Advisor {
    /// Case-insensitive keyword match; `None` when nothing matches.
    pub fn route(message: &str) -> Option<Advisor> {
        let message = message.to_lowercase();
        ROUTES
            .iter()
            .find(|(keyword, _)| message.contains(keyword))
            .map(|(_, advisor)| *advisor)
    }

    fn template(self) -> &'static str {
        match self {
            Advisor::Graduation => GRADUATION_TEMPLATE,
            Advisor::JobSearch => JOB_SEARCH_TEMPLATE,
            Advisor::GradSchool => GRAD_SCHOOL_TEMPLATE,
        }
    }
}

pub async fn handle_request(generator: &dyn Generator, message: &str) -> String {
    let Some(advisor) = Advisor::route(message) else {
        info!("No advisor matched the request");
        return UNRECOGNIZED_RESPONSE.to_string();
    };
    info!("Routing request to {advisor:?} advisor");

    let prompt = fill(
        advisor.template(),
        &[("message", message), ("tone", SUPPORTIVE_TONE)],
    );
    match generator.generate(&prompt).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => ADVISOR_FALLBACK.to_string(),
        Err(e) => {
            warn!("{advisor:?} advisor failed: {e}");
            ADVISOR_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGenerator;

    #[test]
    fn test_routes_each_keyword() {
        assert_eq!(
            Advisor::route("I will graduate next spring"),
            Some(Advisor::Graduation)
        );
        assert_eq!(Advisor::route("Need a JOB asap"), Some(Advisor::JobSearch));
        assert_eq!(
            Advisor::route("Thinking about grad school"),
            Some(Advisor::GradSchool)
        );
    }

    #[test]
    fn test_job_beats_grad_school() {
        assert_eq!(
            Advisor::route("Should I take the job or go to grad school?"),
            Some(Advisor::JobSearch)
        );
    }

    #[test]
    fn test_graduate_beats_everything() {
        assert_eq!(
            Advisor::route("After I graduate: job or grad school?"),
            Some(Advisor::Graduation)
        );
    }

    #[tokio::test]
    async fn test_unrecognized_request() {
        let generator = FakeGenerator::replying("should not be used");
        assert_eq!(
            handle_request(&generator, "What's the weather?").await,
            UNRECOGNIZED_RESPONSE
        );
        assert!(generator.last_prompt().is_none());
    }

    #[tokio::test]
    async fn test_dispatches_with_matching_template() {
        let generator = FakeGenerator::replying("  Update your CV first.  ");
        let response = handle_request(&generator, "help me find a job").await;
        assert_eq!(response, "Update your CV first.");
        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.starts_with("You are a supportive job search advisor."));
        assert!(prompt.ends_with("help me find a job"));
    }

    #[tokio::test]
    async fn test_model_failure_uses_fallback() {
        let generator = FakeGenerator::failing();
        assert_eq!(
            handle_request(&generator, "grad school options?").await,
            ADVISOR_FALLBACK
        );
    }
}
