//! Repetition counter - per-frame orchestration
//!
//! position check → torso angle → median smoothing → stage transition →
//! validation on return to `Down` → feedback.
//!
//! One counter tracks one subject. State is owned by the instance and
//! mutated once per frame; run separate instances for separate people.

use crate::pose::{JointMap, MediaPipePose, PoseEstimator, Side, is_valid_position};

use super::config::Thresholds;
use super::feedback::Feedback;
use super::history::StageHistory;
use super::smoother::AngleSmoother;
use super::stage::{Stage, next_stage};
use super::validator::{RepVerdict, validate_repetition};

/// Outcome of one processed frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameUpdate {
    /// Total accepted repetitions
    pub count: u32,
    /// Stage after this frame (`None` until the first measurable frame)
    pub stage: Option<Stage>,
    /// Smoothed torso angle, if one was measured this frame
    pub angle: Option<f32>,
    /// Whether a complete joint triple was present
    pub valid_position: bool,
    /// Set on frames that completed a cycle
    pub verdict: Option<RepVerdict>,
    pub feedback: Feedback,
}

impl FrameUpdate {
    /// True on the frame a repetition was accepted
    pub fn counted(&self) -> bool {
        self.verdict.is_some_and(|v| v.is_valid())
    }

    pub fn message(&self) -> String {
        self.feedback.message()
    }
}

/// Frame outcome plus whatever landmarks the provider produced
#[derive(Clone, Debug)]
pub struct FrameResult<L> {
    pub update: FrameUpdate,
    pub landmarks: Option<L>,
}

/// Snapshot of counter state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterStats {
    pub total_count: u32,
    pub current_stage: Option<Stage>,
    pub angle_history_length: usize,
    pub stage_history_length: usize,
}

/// Count, stage and both histories
#[derive(Clone, Debug, Default)]
struct CounterState {
    count: u32,
    stage: Option<Stage>,
    angles: AngleSmoother,
    stages: StageHistory,
}

/// Sit-up repetition counter over a pose provider
pub struct RepCounter<P: PoseEstimator = MediaPipePose> {
    estimator: P,
    thresholds: Thresholds,
    state: CounterState,
}

impl<P: PoseEstimator> RepCounter<P> {
    pub fn new(estimator: P) -> Self {
        Self::with_thresholds(estimator, Thresholds::for_situps())
    }

    pub fn with_thresholds(estimator: P, thresholds: Thresholds) -> Self {
        Self {
            estimator,
            thresholds,
            state: CounterState::default(),
        }
    }

    /// Run the provider on a frame and count from its key points
    pub fn process_frame(&mut self, frame: &P::Frame) -> FrameResult<P::Landmarks> {
        let landmarks = self.estimator.landmarks(frame);
        let joints = self.estimator.key_points(landmarks.as_ref());
        let update = self.process_joints(&joints);

        FrameResult { update, landmarks }
    }

    /// Count from an already-extracted joint map
    ///
    /// Detection gaps leave count, stage and both histories untouched.
    pub fn process_joints(&mut self, joints: &JointMap) -> FrameUpdate {
        if !is_valid_position(joints) {
            return self.unchanged(false, Feedback::NotPositioned);
        }

        match self.torso_angle(joints) {
            Some(angle) => self.advance(angle),
            None => self.unchanged(true, Feedback::LandmarksUnclear),
        }
    }

    /// Smoothed shoulder-hip-knee angle, left side preferred
    ///
    /// `None` when neither side is complete or the chosen side has
    /// malformed coordinates. Only measurable frames enter the smoother.
    pub fn torso_angle(&mut self, joints: &JointMap) -> Option<f32> {
        let triple = Side::PREFERRED.iter().find_map(|side| joints.triple(*side))?;
        if !triple.is_well_formed() {
            return None;
        }

        let raw = self.estimator.angle(&triple.shoulder, &triple.hip, &triple.knee);
        if !raw.is_finite() {
            return None;
        }

        Some(self.state.angles.smooth(raw))
    }

    /// Count from a raw torso angle measured upstream
    ///
    /// The angle goes through the smoother like any measured frame. A
    /// non-finite angle leaves state untouched.
    pub fn process_angle(&mut self, raw_angle: f32) -> FrameUpdate {
        if !raw_angle.is_finite() {
            return self.unchanged(true, Feedback::LandmarksUnclear);
        }

        let angle = self.state.angles.smooth(raw_angle);
        self.advance(angle)
    }

    /// Advance the stage machine with an angle already in the smoother
    fn advance(&mut self, angle: f32) -> FrameUpdate {
        let previous = self.state.stage;
        let stage = next_stage(angle, previous, &self.thresholds);

        if previous != Some(stage) {
            self.state.stages.record(stage);
        }
        self.state.stage = Some(stage);

        let completed_cycle = previous.is_some_and(|p| p.is_descending()) && stage == Stage::Down;

        let verdict = completed_cycle.then(|| {
            validate_repetition(
                &self.state.stages,
                &self.state.angles,
                self.thresholds.min_range_of_motion,
            )
        });

        let feedback = match verdict {
            Some(RepVerdict::Valid) => {
                self.state.count += 1;
                Feedback::Counted(self.state.count)
            }
            Some(_) => Feedback::GoFurther,
            None => Feedback::Stage(stage),
        };

        FrameUpdate {
            count: self.state.count,
            stage: Some(stage),
            angle: Some(angle),
            valid_position: true,
            verdict,
            feedback,
        }
    }

    /// Clear count, stage and both histories
    pub fn reset(&mut self) {
        self.state = CounterState::default();
    }

    pub fn stats(&self) -> CounterStats {
        CounterStats {
            total_count: self.state.count,
            current_stage: self.state.stage,
            angle_history_length: self.state.angles.len(),
            stage_history_length: self.state.stages.len(),
        }
    }

    pub fn count(&self) -> u32 {
        self.state.count
    }

    pub fn stage(&self) -> Option<Stage> {
        self.state.stage
    }

    /// Takes effect from the next frame; history is kept
    pub fn set_thresholds(&mut self, thresholds: Thresholds) {
        self.thresholds = thresholds;
    }

    pub fn estimator_mut(&mut self) -> &mut P {
        &mut self.estimator
    }

    fn unchanged(&self, valid_position: bool, feedback: Feedback) -> FrameUpdate {
        FrameUpdate {
            count: self.state.count,
            stage: self.state.stage,
            angle: None,
            valid_position,
            verdict: None,
            feedback,
        }
    }
}

impl Default for RepCounter<MediaPipePose> {
    fn default() -> Self {
        Self::new(MediaPipePose::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed an angle that is already smooth; it still lands in the
    /// angle history so the range gate judges the same samples
    fn step(counter: &mut RepCounter, angle: f32) -> FrameUpdate {
        counter.state.angles.smooth(angle);
        counter.advance(angle)
    }

    fn stages_for(counter: &mut RepCounter, angles: &[f32]) -> Vec<Stage> {
        angles
            .iter()
            .map(|&a| step(counter, a).stage.unwrap())
            .collect()
    }

    #[test]
    fn test_new_counter_is_empty() {
        let counter = RepCounter::new(MediaPipePose::new());
        assert_eq!(
            counter.stats(),
            CounterStats {
                total_count: 0,
                current_stage: None,
                angle_history_length: 0,
                stage_history_length: 0,
            }
        );
    }

    #[test]
    fn test_acceptance_sequence_counts_once_at_the_end() {
        let mut counter = RepCounter::new(MediaPipePose::new());
        let angles = [150.0, 150.0, 100.0, 60.0, 60.0, 100.0];
        let expected = [
            Stage::Down,
            Stage::Down,
            Stage::TransitionUp,
            Stage::Up,
            Stage::Up,
            Stage::TransitionDown,
        ];
        for (&a, &stage) in angles.iter().zip(expected.iter()) {
            let update = step(&mut counter, a);
            assert_eq!(update.stage, Some(stage));
            assert_eq!(update.count, 0);
        }

        let last = step(&mut counter, 150.0);
        assert_eq!(counter.stats().angle_history_length, 7);
        assert_eq!(last.stage, Some(Stage::Down));
        assert_eq!(last.count, 1);
        assert!(last.counted());
        assert_eq!(last.message(), "Excellent! Sit-up #1 counted ✓");
    }

    #[test]
    fn test_holding_down_does_not_double_count() {
        let mut counter = RepCounter::new(MediaPipePose::new());
        for a in [150.0, 150.0, 100.0, 60.0, 60.0, 100.0, 150.0] {
            step(&mut counter, a);
        }
        let again = step(&mut counter, 150.0);
        assert_eq!(again.count, 1);
        assert!(again.verdict.is_none());
        assert_eq!(again.message(), "Ready - now sit up!");
    }

    #[test]
    fn test_duplicate_stages_are_not_recorded() {
        let mut counter = RepCounter::new(MediaPipePose::new());
        stages_for(&mut counter, &[150.0, 150.0, 150.0, 60.0, 60.0]);
        assert_eq!(counter.stats().stage_history_length, 2);
    }

    #[test]
    fn test_dead_zone_first_frame_is_unknown() {
        let mut counter = RepCounter::new(MediaPipePose::new());
        let update = step(&mut counter, 100.0);
        assert_eq!(update.stage, Some(Stage::Unknown));
        assert!(update.message().is_empty());
    }

    #[test]
    fn test_incomplete_cycle_gets_corrective_feedback() {
        let mut counter = RepCounter::new(MediaPipePose::new());
        // Up then straight back down with no recorded Down before it
        let stages = stages_for(&mut counter, &[60.0, 100.0, 150.0]);
        assert_eq!(stages, vec![Stage::Up, Stage::TransitionDown, Stage::Down]);
        let stats = counter.stats();
        assert_eq!(stats.total_count, 0);

        step(&mut counter, 60.0);
        let update = step(&mut counter, 150.0);
        assert_eq!(update.verdict, Some(RepVerdict::IncompleteSequence));
        assert_eq!(update.message(), "Almost there! Go all the way up for full rep");
        assert_eq!(update.count, 0);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut counter = RepCounter::new(MediaPipePose::new());
        for a in [150.0, 100.0, 60.0, 100.0, 150.0] {
            step(&mut counter, a);
        }
        assert_eq!(counter.count(), 1);

        counter.reset();
        counter.reset();
        assert_eq!(counter.stats(), RepCounter::new(MediaPipePose::new()).stats());
        assert_eq!(counter.stage(), None);
    }

    #[test]
    fn test_thresholds_can_be_tightened() {
        let mut counter = RepCounter::new(MediaPipePose::new());
        counter.set_thresholds(Thresholds::new(160.0, 50.0, 50.0).unwrap());
        assert_eq!(step(&mut counter, 150.0).stage, Some(Stage::Unknown));
        assert_eq!(step(&mut counter, 55.0).stage, Some(Stage::Unknown));
        assert_eq!(step(&mut counter, 45.0).stage, Some(Stage::Up));
    }

    #[test]
    fn test_shallow_swing_through_full_pattern_is_rejected() {
        let mut counter = RepCounter::new(MediaPipePose::new());
        counter.set_thresholds(Thresholds::new(115.0, 105.0, 50.0).unwrap());
        let stages = stages_for(&mut counter, &[120.0, 110.0, 100.0, 110.0]);
        assert_eq!(
            stages,
            vec![Stage::Down, Stage::TransitionUp, Stage::Up, Stage::TransitionDown]
        );

        let last = step(&mut counter, 120.0);
        assert_eq!(last.stage, Some(Stage::Down));
        assert_eq!(last.verdict, Some(RepVerdict::ShallowMotion));
        assert_eq!(last.count, 0);
        assert_eq!(counter.stats().angle_history_length, 5);
    }

    #[test]
    fn test_process_angle_counts_a_full_situp() {
        let mut counter = RepCounter::new(MediaPipePose::new());
        let mut counted_at = Vec::new();
        for (i, &a) in [160.0; 10].iter().chain(&[40.0; 10]).chain(&[160.0; 10]).enumerate() {
            if counter.process_angle(a).counted() {
                counted_at.push(i);
            }
        }
        assert_eq!(counted_at, vec![25]);
        assert_eq!(counter.stats().angle_history_length, 10);
    }

    #[test]
    fn test_process_angle_rejects_shallow_bobbing() {
        let mut counter = RepCounter::new(MediaPipePose::new());
        counter.set_thresholds(Thresholds::new(115.0, 105.0, 50.0).unwrap());
        let mut verdicts = Vec::new();
        for &a in [120.0; 10].iter().chain(&[100.0; 10]).chain(&[120.0; 10]) {
            verdicts.extend(counter.process_angle(a).verdict);
        }
        assert_eq!(verdicts, vec![RepVerdict::ShallowMotion]);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_process_angle_skips_non_finite_input() {
        let mut counter = RepCounter::new(MediaPipePose::new());
        counter.process_angle(150.0);
        let before = counter.stats();

        let update = counter.process_angle(f32::NAN);
        assert!(update.angle.is_none());
        assert_eq!(update.feedback, Feedback::LandmarksUnclear);
        assert_eq!(counter.stats(), before);
    }
}
