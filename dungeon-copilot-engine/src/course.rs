//! Course content: the fixed ordered sequence of training stages.
use serde::{Deserialize, Serialize};

static COURSE_DATA: &str = include_str!("../../dungeon-copilot-web/static/assets/data/course.json");

/// A practice prompt the learner can copy into Copilot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PromptSpec {
    pub label: String,
    pub text: String,
}

/// One stage of the training sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StageSpec {
    /// Stable identifier following the `stage<N>` pattern.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// What the learner should accomplish before moving on.
    #[serde(default)]
    pub objective: String,
    /// Task labels; the collective checked state gates progression.
    #[serde(default)]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub prompts: Vec<PromptSpec>,
}

/// Complete course data structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseData {
    pub stages: Vec<StageSpec>,
}

impl CourseData {
    /// Create empty course data for testing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load course data from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid course data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the course shipped with the app.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(COURSE_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn stage(&self, index: usize) -> Option<&StageSpec> {
        self.stages.get(index)
    }

    /// Checklist item count per stage, in order.
    #[must_use]
    pub fn checklist_shape(&self) -> Vec<usize> {
        self.stages.iter().map(|s| s.checklist.len()).collect()
    }

    /// Total checklist items across the course, document order.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.stages.iter().map(|s| s.checklist.len()).sum()
    }
}
