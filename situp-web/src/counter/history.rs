//! Stage-change history
//!
//! Callers record only changes, so a subject holding a position for many
//! frames occupies one entry.

use std::collections::VecDeque;

use super::stage::Stage;

/// Number of stage-change events kept
pub const STAGE_HISTORY_CAPACITY: usize = 20;

#[derive(Clone, Debug)]
pub struct StageHistory {
    events: VecDeque<Stage>,
}

impl StageHistory {
    pub fn new() -> Self {
        Self {
            events: VecDeque::with_capacity(STAGE_HISTORY_CAPACITY + 1),
        }
    }

    /// Append a stage-change event, dropping the oldest past capacity
    pub fn record(&mut self, stage: Stage) {
        self.events.push_back(stage);

        while self.events.len() > STAGE_HISTORY_CAPACITY {
            self.events.pop_front();
        }
    }

    /// The most recent `n` events in chronological order
    pub fn recent(&self, n: usize) -> Vec<Stage> {
        let skip = self.events.len().saturating_sub(n);
        self.events.iter().skip(skip).copied().collect()
    }

    pub fn last(&self) -> Option<Stage> {
        self.events.back().copied()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for StageHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Stage> for StageHistory {
    fn from_iter<I: IntoIterator<Item = Stage>>(iter: I) -> Self {
        let mut history = Self::new();
        for stage in iter {
            history.record(stage);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut history = StageHistory::new();
        for i in 0..50 {
            history.record(if i % 2 == 0 { Stage::Down } else { Stage::Up });
        }
        assert_eq!(history.len(), STAGE_HISTORY_CAPACITY);
        assert_eq!(history.last(), Some(Stage::Up));
    }

    #[test]
    fn test_recent_returns_tail_in_order() {
        let history: StageHistory =
            [Stage::Down, Stage::TransitionUp, Stage::Up, Stage::TransitionDown].into_iter().collect();
        assert_eq!(history.recent(2), vec![Stage::Up, Stage::TransitionDown]);
        assert_eq!(history.recent(10).len(), 4);
    }
}
