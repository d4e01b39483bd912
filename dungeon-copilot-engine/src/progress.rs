//! Stage progression: lock derivation, navigation guards, and transitions.
//!
//! Lock states are never stored. They are recomputed from checklist contents
//! with a full left-to-right scan after every mutation, because checking or
//! unchecking a single item can change the lock state of every stage after it.

use crate::course::CourseData;
use crate::section::SectionId;
use smallvec::SmallVec;
use thiserror::Error;

/// Derived gate status of a stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Unlocked,
    Completed,
}

impl LockState {
    /// Class name used by the presentation layer for stage indicators.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
            Self::Completed => "completed",
        }
    }

    /// Whether direct navigation into a stage in this state is admitted.
    #[must_use]
    pub const fn is_enterable(self) -> bool {
        matches!(self, Self::Unlocked | Self::Completed)
    }
}

/// Checklist flags for every stage, shaped from course data.
///
/// Each stage owns its ordered run of booleans; the flat view in document
/// order exists only for persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChecklistState {
    stages: Vec<Vec<bool>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecklistError {
    #[error("stage index {0} out of range")]
    StageOutOfRange(usize),
    #[error("item index {item} out of range for stage {stage}")]
    ItemOutOfRange { stage: usize, item: usize },
}

impl ChecklistState {
    /// Fresh, fully unchecked flags shaped after the course's stages.
    #[must_use]
    pub fn for_course(course: &CourseData) -> Self {
        Self::from_shape(&course.checklist_shape())
    }

    /// Build from explicit per-stage item counts.
    #[must_use]
    pub fn from_shape(shape: &[usize]) -> Self {
        Self {
            stages: shape.iter().map(|&len| vec![false; len]).collect(),
        }
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Item flags for one stage; empty for out-of-range indices.
    #[must_use]
    pub fn items(&self, stage: usize) -> &[bool] {
        self.stages.get(stage).map_or(&[], Vec::as_slice)
    }

    /// Set one flag.
    ///
    /// # Errors
    ///
    /// Returns an error when either index is out of range.
    pub fn set(&mut self, stage: usize, item: usize, checked: bool) -> Result<(), ChecklistError> {
        let items = self
            .stages
            .get_mut(stage)
            .ok_or(ChecklistError::StageOutOfRange(stage))?;
        let slot = items
            .get_mut(item)
            .ok_or(ChecklistError::ItemOutOfRange { stage, item })?;
        *slot = checked;
        Ok(())
    }

    /// Flip one flag and return its new value.
    ///
    /// # Errors
    ///
    /// Returns an error when either index is out of range.
    pub fn toggle(&mut self, stage: usize, item: usize) -> Result<bool, ChecklistError> {
        let current = *self
            .stages
            .get(stage)
            .ok_or(ChecklistError::StageOutOfRange(stage))?
            .get(item)
            .ok_or(ChecklistError::ItemOutOfRange { stage, item })?;
        self.set(stage, item, !current)?;
        Ok(!current)
    }

    /// Whether the stage registers as completed: at least one item, all
    /// checked. A stage with no checklist can never complete.
    #[must_use]
    pub fn stage_complete(&self, stage: usize) -> bool {
        let items = self.items(stage);
        !items.is_empty() && items.iter().all(|&checked| checked)
    }

    /// Whether "next" navigation away from the stage is admitted: no
    /// checklist, or every item checked.
    #[must_use]
    pub fn can_advance(&self, stage: usize) -> bool {
        self.items(stage).iter().all(|&checked| checked)
    }

    /// Uncheck everything.
    pub fn clear(&mut self) {
        for items in &mut self.stages {
            items.fill(false);
        }
    }

    /// All flags in document order.
    #[must_use]
    pub fn flat(&self) -> Vec<bool> {
        self.stages.iter().flatten().copied().collect()
    }

    /// Set a flag by flat position. Returns whether the position matched a
    /// real item; unmatched positions are ignored by callers restoring a
    /// snapshot with a stale shape.
    pub fn set_flat(&mut self, index: usize, checked: bool) -> bool {
        let mut remaining = index;
        for items in &mut self.stages {
            if remaining < items.len() {
                items[remaining] = checked;
                return true;
            }
            remaining -= items.len();
        }
        false
    }

    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.stages
            .iter()
            .flatten()
            .filter(|&&checked| checked)
            .count()
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.stages.iter().map(Vec::len).sum()
    }

    /// Share of checked items across the whole course, 0..=100.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_percent(&self) -> f64 {
        let total = self.total_items();
        if total == 0 {
            return 0.0;
        }
        self.checked_count() as f64 / total as f64 * 100.0
    }
}

/// Compute per-stage lock states with a single left-to-right scan.
///
/// Only checklist-bearing stages can move the last-completed marker; the
/// first stage always reports `Unlocked`, whatever its checklist says.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn compute_lock_states(checklist: &ChecklistState) -> Vec<LockState> {
    let mut last_completed: isize = -1;
    for stage in 0..checklist.stage_count() {
        if checklist.stage_complete(stage) {
            last_completed = stage as isize;
        }
    }

    (0..checklist.stage_count())
        .map(|index| {
            let position = index as isize;
            if index == 0 {
                LockState::Unlocked
            } else if position <= last_completed {
                LockState::Completed
            } else if position <= last_completed + 1 {
                LockState::Unlocked
            } else {
                LockState::Locked
            }
        })
        .collect()
}

/// Whether direct navigation to a section is admitted under the given locks.
/// Pseudo-sections are never gated.
#[must_use]
pub fn can_navigate_to(target: SectionId, locks: &[LockState]) -> bool {
    match target {
        SectionId::Stage(n) => (n as usize)
            .checked_sub(1)
            .and_then(|index| locks.get(index))
            .is_some_and(|lock| lock.is_enterable()),
        _ => true,
    }
}

/// Side effects reported by a successful transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The walkthrough's terminal section was entered; the presentation
    /// layer owes the learner a celebration.
    CourseCompleted,
}

/// Outcome of a successful navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: SectionId,
    pub to: SectionId,
    pub events: SmallVec<[ProgressEvent; 1]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationDenied {
    #[error("stage {0} is locked; complete the previous stage to unlock it")]
    StageLocked(u8),
    #[error("the active stage's checklist is not complete")]
    ChecklistIncomplete,
    #[error("no section follows {0}")]
    AtEnd(SectionId),
    #[error("stage {0} does not exist")]
    UnknownStage(u8),
}

/// The single owning progression value: active section plus checklist flags.
///
/// The presentation layer holds one instance and re-renders after each
/// transition; every transition here is a pure state change with the denial
/// cases surfaced as values rather than alerts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressionState {
    active: SectionId,
    checklist: ChecklistState,
}

impl ProgressionState {
    /// Fresh progression: landing page shown, nothing checked.
    #[must_use]
    pub fn new(course: &CourseData) -> Self {
        Self {
            active: SectionId::Landing,
            checklist: ChecklistState::for_course(course),
        }
    }

    #[must_use]
    pub const fn active(&self) -> SectionId {
        self.active
    }

    #[must_use]
    pub const fn checklist(&self) -> &ChecklistState {
        &self.checklist
    }

    pub fn checklist_mut(&mut self) -> &mut ChecklistState {
        &mut self.checklist
    }

    #[must_use]
    pub fn lock_states(&self) -> Vec<LockState> {
        compute_lock_states(&self.checklist)
    }

    #[must_use]
    pub fn completion_percent(&self) -> f64 {
        self.checklist.completion_percent()
    }

    /// Flip one checklist flag and return its new value.
    ///
    /// # Errors
    ///
    /// Returns an error when either index is out of range.
    pub fn toggle_item(&mut self, stage: usize, item: usize) -> Result<bool, ChecklistError> {
        self.checklist.toggle(stage, item)
    }

    /// The section a "next" control leads to from `from`, if any.
    #[must_use]
    pub fn next_section(&self, from: SectionId) -> Option<SectionId> {
        let stage_count = u8::try_from(self.checklist.stage_count()).ok()?;
        match from {
            SectionId::Landing => Some(SectionId::QuestMap),
            SectionId::QuestMap => (stage_count > 0).then_some(SectionId::Stage(1)),
            SectionId::Stage(n) if n < stage_count => Some(SectionId::Stage(n + 1)),
            SectionId::Stage(n) if n == stage_count => Some(SectionId::Completion),
            SectionId::Stage(_) | SectionId::Completion => None,
        }
    }

    /// Direct navigation, gated by the target's lock state.
    ///
    /// # Errors
    ///
    /// Returns the denial without mutating state when the target stage is
    /// locked or unknown.
    pub fn navigate(&mut self, target: SectionId) -> Result<Transition, NavigationDenied> {
        if let SectionId::Stage(n) = target {
            let index = (n as usize)
                .checked_sub(1)
                .ok_or(NavigationDenied::UnknownStage(n))?;
            if index >= self.checklist.stage_count() {
                return Err(NavigationDenied::UnknownStage(n));
            }
            if !can_navigate_to(target, &self.lock_states()) {
                return Err(NavigationDenied::StageLocked(n));
            }
        }
        Ok(self.enter(target))
    }

    /// Forward navigation from the active section, gated only by the active
    /// stage's own checklist.
    ///
    /// # Errors
    ///
    /// Returns the denial without mutating state when the active checklist
    /// is incomplete or no section follows.
    pub fn navigate_next(&mut self) -> Result<Transition, NavigationDenied> {
        if let Some(index) = self.active.stage_index()
            && !self.checklist.can_advance(index)
        {
            return Err(NavigationDenied::ChecklistIncomplete);
        }
        let target = self
            .next_section(self.active)
            .ok_or(NavigationDenied::AtEnd(self.active))?;
        Ok(self.enter(target))
    }

    /// Revert to the fresh state: everything unchecked, landing page shown.
    pub fn reset(&mut self) {
        self.checklist.clear();
        self.active = SectionId::Landing;
    }

    fn enter(&mut self, target: SectionId) -> Transition {
        let from = self.active;
        self.active = target;
        let mut events = SmallVec::new();
        if target == SectionId::Completion && from != SectionId::Completion {
            events.push(ProgressEvent::CourseCompleted);
        }
        Transition {
            from,
            to: target,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checklist(shape: &[usize]) -> ChecklistState {
        ChecklistState::from_shape(shape)
    }

    fn check_stage(state: &mut ChecklistState, stage: usize) {
        for item in 0..state.items(stage).len() {
            state.set(stage, item, true).unwrap();
        }
    }

    #[test]
    fn first_stage_reports_unlocked_regardless_of_checklist() {
        let mut state = checklist(&[2, 2, 2]);
        assert_eq!(compute_lock_states(&state)[0], LockState::Unlocked);
        check_stage(&mut state, 0);
        // Completing the first stage still reports Unlocked for it while
        // moving the marker that unlocks the second.
        let locks = compute_lock_states(&state);
        assert_eq!(locks[0], LockState::Unlocked);
        assert_eq!(locks[1], LockState::Unlocked);
    }

    #[test]
    fn lock_scan_matches_seven_stage_scenario() {
        let mut state = checklist(&[2; 7]);
        check_stage(&mut state, 0);
        check_stage(&mut state, 1);
        let locks = compute_lock_states(&state);
        assert_eq!(
            locks,
            vec![
                LockState::Unlocked,
                LockState::Completed,
                LockState::Unlocked,
                LockState::Locked,
                LockState::Locked,
                LockState::Locked,
                LockState::Locked,
            ]
        );
    }

    #[test]
    fn lock_scan_is_idempotent() {
        let mut state = checklist(&[3, 1, 2]);
        check_stage(&mut state, 0);
        state.set(2, 0, true).unwrap();
        assert_eq!(compute_lock_states(&state), compute_lock_states(&state));
    }

    #[test]
    fn empty_checklist_stage_never_completes() {
        let mut state = checklist(&[2, 0, 2]);
        check_stage(&mut state, 0);
        // Stage 1 has no items: it unlocks but never registers completion,
        // so stage 2 stays locked forever under this shape.
        let locks = compute_lock_states(&state);
        assert_eq!(locks[1], LockState::Unlocked);
        assert_eq!(locks[2], LockState::Locked);
        assert!(!state.stage_complete(1));
        assert!(state.can_advance(1));
    }

    #[test]
    fn unchecking_the_frontier_stage_relocks_downstream_stages() {
        let mut state = checklist(&[2, 2, 2, 2]);
        check_stage(&mut state, 0);
        check_stage(&mut state, 1);
        check_stage(&mut state, 2);
        assert_eq!(compute_lock_states(&state)[3], LockState::Unlocked);
        state.set(2, 0, false).unwrap();
        let locks = compute_lock_states(&state);
        assert_eq!(locks[2], LockState::Unlocked);
        assert_eq!(locks[3], LockState::Locked);
    }

    #[test]
    fn marker_tracks_the_last_completed_stage_not_a_contiguous_run() {
        // Uncheck a mid-course item while a later stage stays complete: the
        // marker sits on the later stage, so nothing downstream relocks and
        // the gap still shows as completed.
        let mut state = checklist(&[2, 2, 2, 2]);
        check_stage(&mut state, 0);
        check_stage(&mut state, 1);
        check_stage(&mut state, 2);
        state.set(1, 0, false).unwrap();
        let locks = compute_lock_states(&state);
        assert_eq!(
            locks,
            vec![
                LockState::Unlocked,
                LockState::Completed,
                LockState::Completed,
                LockState::Unlocked,
            ]
        );
    }

    #[test]
    fn can_advance_allows_empty_and_blocks_partial_checklists() {
        let mut state = checklist(&[0, 2]);
        assert!(state.can_advance(0), "empty checklist always advances");
        assert!(!state.can_advance(1));
        state.set(1, 0, true).unwrap();
        assert!(!state.can_advance(1));
        state.set(1, 1, true).unwrap();
        assert!(state.can_advance(1));
    }

    #[test]
    fn pseudo_sections_are_never_gated() {
        let locks = vec![LockState::Unlocked, LockState::Locked];
        assert!(can_navigate_to(SectionId::Landing, &locks));
        assert!(can_navigate_to(SectionId::QuestMap, &locks));
        assert!(can_navigate_to(SectionId::Completion, &locks));
        assert!(can_navigate_to(SectionId::Stage(1), &locks));
        assert!(!can_navigate_to(SectionId::Stage(2), &locks));
        assert!(!can_navigate_to(SectionId::Stage(9), &locks));
    }

    #[test]
    fn toggle_round_trips_and_reports_errors() {
        let mut state = checklist(&[1]);
        assert_eq!(state.toggle(0, 0), Ok(true));
        assert_eq!(state.toggle(0, 0), Ok(false));
        assert_eq!(state.toggle(5, 0), Err(ChecklistError::StageOutOfRange(5)));
        assert_eq!(
            state.toggle(0, 9),
            Err(ChecklistError::ItemOutOfRange { stage: 0, item: 9 })
        );
    }

    #[test]
    fn flat_view_walks_document_order() {
        let mut state = checklist(&[2, 1]);
        state.set(0, 1, true).unwrap();
        state.set(1, 0, true).unwrap();
        assert_eq!(state.flat(), vec![false, true, true]);
        assert!(state.set_flat(0, true));
        assert!(!state.set_flat(3, true), "past the end is ignored");
        assert_eq!(state.checked_count(), 3);
        assert_eq!(state.total_items(), 3);
    }

    #[test]
    fn completion_percent_spans_zero_to_hundred() {
        let mut state = checklist(&[2, 2]);
        assert!((state.completion_percent() - 0.0).abs() < f64::EPSILON);
        state.set(0, 0, true).unwrap();
        assert!((state.completion_percent() - 25.0).abs() < f64::EPSILON);
        check_stage(&mut state, 0);
        check_stage(&mut state, 1);
        assert!((state.completion_percent() - 100.0).abs() < f64::EPSILON);
        assert!((checklist(&[]).completion_percent() - 0.0).abs() < f64::EPSILON);
    }

    fn course_with_shape(shape: &[usize]) -> CourseData {
        use crate::course::StageSpec;
        CourseData {
            stages: shape
                .iter()
                .enumerate()
                .map(|(index, &len)| StageSpec {
                    id: format!("stage{}", index + 1),
                    title: format!("Stage {}", index + 1),
                    subtitle: String::new(),
                    objective: String::new(),
                    checklist: (0..len).map(|i| format!("Task {i}")).collect(),
                    prompts: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn navigation_to_locked_stage_is_denied_without_mutation() {
        let course = course_with_shape(&[2, 2, 2]);
        let mut progress = ProgressionState::new(&course);
        let before = progress.clone();
        assert_eq!(
            progress.navigate(SectionId::Stage(3)),
            Err(NavigationDenied::StageLocked(3))
        );
        assert_eq!(progress, before, "denied navigation must not mutate");
        assert_eq!(
            progress.navigate(SectionId::Stage(9)),
            Err(NavigationDenied::UnknownStage(9))
        );
    }

    #[test]
    fn navigation_walks_unlocked_stages_and_pseudo_sections() {
        let course = course_with_shape(&[1, 1]);
        let mut progress = ProgressionState::new(&course);
        let transition = progress.navigate(SectionId::QuestMap).unwrap();
        assert_eq!(transition.from, SectionId::Landing);
        assert_eq!(transition.to, SectionId::QuestMap);
        assert!(transition.events.is_empty());

        progress.navigate(SectionId::Stage(1)).unwrap();
        assert_eq!(progress.active(), SectionId::Stage(1));
        // Backward and map navigation stay open while a stage is active.
        progress.navigate(SectionId::QuestMap).unwrap();
        progress.navigate(SectionId::Stage(1)).unwrap();
    }

    #[test]
    fn next_is_gated_by_the_active_checklist_only() {
        let course = course_with_shape(&[1, 2]);
        let mut progress = ProgressionState::new(&course);
        progress.navigate(SectionId::Stage(1)).unwrap();
        assert_eq!(
            progress.navigate_next(),
            Err(NavigationDenied::ChecklistIncomplete)
        );
        progress.toggle_item(0, 0).unwrap();
        let transition = progress.navigate_next().unwrap();
        assert_eq!(transition.to, SectionId::Stage(2));
    }

    #[test]
    fn next_from_pseudo_sections_is_ungated() {
        let course = course_with_shape(&[2]);
        let mut progress = ProgressionState::new(&course);
        assert_eq!(progress.navigate_next().unwrap().to, SectionId::QuestMap);
        assert_eq!(progress.navigate_next().unwrap().to, SectionId::Stage(1));
    }

    #[test]
    fn entering_completion_emits_the_celebration_event() {
        let course = course_with_shape(&[1]);
        let mut progress = ProgressionState::new(&course);
        progress.navigate(SectionId::Stage(1)).unwrap();
        progress.toggle_item(0, 0).unwrap();
        let transition = progress.navigate_next().unwrap();
        assert_eq!(transition.to, SectionId::Completion);
        assert!(matches!(
            transition.events.as_slice(),
            [ProgressEvent::CourseCompleted]
        ));

        // Re-entering the terminal section does not celebrate twice in a row.
        let transition = progress.navigate(SectionId::Completion).unwrap();
        assert!(transition.events.is_empty());
        assert_eq!(progress.navigate_next(), Err(NavigationDenied::AtEnd(SectionId::Completion)));
    }

    #[test]
    fn reset_returns_to_fresh_state() {
        let course = course_with_shape(&[1, 1]);
        let mut progress = ProgressionState::new(&course);
        progress.navigate(SectionId::Stage(1)).unwrap();
        progress.toggle_item(0, 0).unwrap();
        progress.reset();
        assert_eq!(progress.active(), SectionId::Landing);
        assert_eq!(progress.checklist().checked_count(), 0);
    }
}
