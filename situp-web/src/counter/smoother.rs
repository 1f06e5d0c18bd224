//! Median angle smoothing over a short rolling window
//!
//! Median rather than mean: a single-frame detection spike is ignored
//! instead of dragging the estimate.

use std::collections::VecDeque;

/// Number of recent angle samples kept
pub const ANGLE_HISTORY_CAPACITY: usize = 10;

/// Rolling window of raw angle samples, oldest evicted first
#[derive(Clone, Debug)]
pub struct AngleSmoother {
    history: VecDeque<f32>,
}

impl AngleSmoother {
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(ANGLE_HISTORY_CAPACITY + 1),
        }
    }

    /// Record a raw angle and return the median of the window
    pub fn smooth(&mut self, raw_angle: f32) -> f32 {
        self.history.push_back(raw_angle);

        while self.history.len() > ANGLE_HISTORY_CAPACITY {
            self.history.pop_front();
        }

        median(&self.history)
    }

    /// Samples in chronological order
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.history.iter().copied()
    }

    /// (min, max) of the most recent `window` samples
    pub fn extent(&self, window: usize) -> Option<(f32, f32)> {
        let skip = self.history.len().saturating_sub(window);
        self.history
            .iter()
            .skip(skip)
            .fold(None, |acc, &a| match acc {
                None => Some((a, a)),
                Some((lo, hi)) => Some((lo.min(a), hi.max(a))),
            })
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for AngleSmoother {
    fn default() -> Self {
        Self::new()
    }
}

/// Median of a non-empty window; even lengths average the middle pair
fn median(window: &VecDeque<f32>) -> f32 {
    let mut sorted: Vec<f32> = window.iter().copied().collect();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
