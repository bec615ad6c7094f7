use std::collections::BTreeMap;

/// Goals keyed by text; the flag records completion.
#[derive(Debug, Default)]
pub struct GoalTracker {
    goals: BTreeMap<String, bool>,
}

impl GoalTracker {
    /// Adds a goal, or re-opens it if it already exists.
    pub fn set_goal(&mut self, goal: &str) -> String {
        self.goals.insert(goal.to_string(), false);
        format!("New goal added: {goal}")
    }

    pub fn complete_goal(&mut self, goal: &str) -> String {
        match self.goals.get_mut(goal) {
            Some(done) => {
                *done = true;
                format!("Great job! Goal '{goal}' completed.")
            }
            None => "Goal not found.".to_string(),
        }
    }

    pub fn status(&self) -> BTreeMap<String, bool> {
        self.goals.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_complete() {
        let mut tracker = GoalTracker::default();
        assert_eq!(tracker.set_goal("walk daily"), "New goal added: walk daily");
        assert_eq!(tracker.status().get("walk daily"), Some(&false));

        assert_eq!(
            tracker.complete_goal("walk daily"),
            "Great job! Goal 'walk daily' completed."
        );
        assert_eq!(tracker.status().get("walk daily"), Some(&true));
    }

    #[test]
    fn test_complete_unknown_goal() {
        let mut tracker = GoalTracker::default();
        assert_eq!(tracker.complete_goal("fly"), "Goal not found.");
        assert!(tracker.status().is_empty());
    }

    #[test]
    fn test_setting_again_reopens() {
        let mut tracker = GoalTracker::default();
        tracker.set_goal("read");
        tracker.complete_goal("read");
        tracker.set_goal("read");
        assert_eq!(tracker.status().get("read"), Some(&false));
    }
}
