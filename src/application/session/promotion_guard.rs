use crate::application::dto::PromotionState;
use dashmap::DashMap;

/// Keeps one dependency name in the InFlight state until finished.
///
/// Dropping the guard without calling [`PromotionGuard::finish`] (an early
/// return, a cancelled future) records the promotion as Failed so the name
/// never stays blocked.
#[derive(Debug)]
pub struct PromotionGuard<'a> {
    promotions: &'a DashMap<String, PromotionState>,
    name: String,
    finished: bool,
}

impl<'a> PromotionGuard<'a> {
    pub(super) fn new(promotions: &'a DashMap<String, PromotionState>, name: String) -> Self {
        Self {
            promotions,
            name,
            finished: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records the terminal state and releases the name
    pub fn finish(mut self, state: PromotionState) {
        self.promotions.insert(self.name.clone(), state);
        self.finished = true;
    }
}

impl Drop for PromotionGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.promotions
                .insert(self.name.clone(), PromotionState::Failed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_without_finish_marks_failed() {
        let promotions = DashMap::new();
        promotions.insert("lodash".to_string(), PromotionState::InFlight);

        {
            let guard = PromotionGuard::new(&promotions, "lodash".to_string());
            assert_eq!(guard.name(), "lodash");
        }

        assert_eq!(*promotions.get("lodash").unwrap(), PromotionState::Failed);
    }
}
