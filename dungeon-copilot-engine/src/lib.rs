//! Dungeon & Co-Pilot Progression Engine
//!
//! Platform-agnostic core logic for the Dungeon & Co-Pilot training
//! walkthrough. This crate owns the stage-progression rules (lock states,
//! navigation gating, checklist persistence) without UI or platform-specific
//! dependencies.

pub mod course;
pub mod persist;
pub mod progress;
pub mod section;

// Re-export commonly used types
pub use course::{CourseData, PromptSpec, StageSpec};
pub use persist::{
    CHECKBOX_KEY, SECTION_KEY, SnapshotError, apply_snapshot, decode_snapshot, encode_snapshot,
    restore_snapshot,
};
pub use progress::{
    ChecklistError, ChecklistState, LockState, NavigationDenied, ProgressEvent, ProgressionState,
    Transition, can_navigate_to, compute_lock_states,
};
pub use section::{ParseSectionError, SectionId};

/// Trait for abstracting progress persistence
/// Platform-specific implementations should provide this
pub trait ProgressStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Record the section currently shown
    ///
    /// # Errors
    ///
    /// Returns an error if the section id cannot be written.
    fn save_section(&self, section: SectionId) -> Result<(), Self::Error>;

    /// Write the full checkbox snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_checkboxes(&self, snapshot: &str) -> Result<(), Self::Error>;

    /// Read the checkbox snapshot, if one was ever written
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_checkboxes(&self) -> Result<Option<String>, Self::Error>;

    /// Remove everything this app persisted
    ///
    /// # Errors
    ///
    /// Returns an error if the keys cannot be removed.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// Facade pairing course content with a storage backend.
///
/// All persistence is best-effort from the app's point of view: the methods
/// here return `Result` so tests can see failures, and callers are free to
/// log and move on.
pub struct ProgressionEngine<S>
where
    S: ProgressStorage,
{
    course: CourseData,
    storage: S,
}

impl<S> ProgressionEngine<S>
where
    S: ProgressStorage,
{
    pub const fn new(course: CourseData, storage: S) -> Self {
        Self { course, storage }
    }

    #[must_use]
    pub const fn course(&self) -> &CourseData {
        &self.course
    }

    /// Fresh progression for this course: landing page, nothing checked.
    #[must_use]
    pub fn new_progress(&self) -> ProgressionState {
        ProgressionState::new(&self.course)
    }

    /// Write-through of the full checkbox snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn save_checkboxes(&self, progress: &ProgressionState) -> Result<(), S::Error> {
        self.storage
            .save_checkboxes(&persist::encode_snapshot(progress.checklist()))
    }

    /// Record the section the learner is looking at.
    ///
    /// # Errors
    ///
    /// Returns an error if the section id cannot be written.
    pub fn save_section(&self, progress: &ProgressionState) -> Result<(), S::Error> {
        self.storage.save_section(progress.active())
    }

    /// Restore persisted checkbox state onto `progress`, returning how many
    /// entries applied. The active section is deliberately left alone: the
    /// walkthrough starts fresh on the landing page every visit, only the
    /// checklist survives. A snapshot that cannot be parsed is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn restore_checkboxes(&self, progress: &mut ProgressionState) -> Result<usize, S::Error> {
        let Some(raw) = self.storage.load_checkboxes()? else {
            return Ok(0);
        };
        match persist::restore_snapshot(progress.checklist_mut(), &raw) {
            Ok(applied) => Ok(applied),
            Err(_) => Ok(0),
        }
    }

    /// Revert state and wipe the persisted keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the keys cannot be removed; the in-memory reset
    /// has already happened by then.
    pub fn reset(&self, progress: &mut ProgressionState) -> Result<(), S::Error> {
        progress.reset();
        self.storage.clear()
    }
}
