//! Companion mini-agents: small, process-lifetime helpers around mood check-ins.
//!
//! All companion state lives in one [`Companions`] aggregate guarded by a single
//! mutex. It is created once in `main`, shared through `AppState`, and reset on
//! restart. Nothing here touches storage or the model.

use std::collections::BTreeMap;

use tokio::sync::Mutex;

pub mod garden;
pub mod goals;
pub mod handlers;
pub mod insight;
pub mod mood_log;
pub mod wellness;

use goals::GoalTracker;
use insight::InsightCounter;
use mood_log::MoodLog;
use wellness::WellnessTipRotor;

#[derive(Debug, Default)]
struct CompanionState {
    mood_log: MoodLog,
    insights: InsightCounter,
    goals: GoalTracker,
    wellness: WellnessTipRotor,
}

#[derive(Debug, Default)]
pub struct Companions {
    state: Mutex<CompanionState>,
}

impl Companions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a checked-in mood label to the mood log and the insight counter.
    pub async fn record_mood(&self, mood: &str) -> String {
        let mut state = self.state.lock().await;
        state.insights.log_entry(mood);
        state.mood_log.log(mood)
    }

    pub async fn mood_analysis(&self) -> &'static str {
        self.state.lock().await.mood_log.analyze()
    }

    pub async fn insight(&self) -> String {
        self.state.lock().await.insights.insight()
    }

    pub async fn next_wellness_tip(&self) -> &'static str {
        self.state.lock().await.wellness.next_tip()
    }

    pub async fn set_goal(&self, goal: &str) -> String {
        self.state.lock().await.goals.set_goal(goal)
    }

    pub async fn complete_goal(&self, goal: &str) -> String {
        self.state.lock().await.goals.complete_goal(goal)
    }

    pub async fn goals(&self) -> BTreeMap<String, bool> {
        self.state.lock().await.goals.status()
    }

    /// Garden growth follows the number of moods logged since startup.
    pub async fn garden_status(&self) -> &'static str {
        garden::growth_message(self.state.lock().await.mood_log.count())
    }
}
