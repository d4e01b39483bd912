//! Section identifiers for the walkthrough.

use std::fmt;
use std::str::FromStr;

/// A displayable section: one numbered stage, or one of the pseudo-sections
/// that are never subject to checklist gating.
///
/// Stage numbers are 1-based to match the `stage<N>` ids used by the
/// presentation layer; [`SectionId::stage_index`] converts to the 0-based
/// position used by the lock computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Landing,
    QuestMap,
    Stage(u8),
    Completion,
}

impl SectionId {
    /// 0-based position in the stage sequence, `None` for pseudo-sections.
    #[must_use]
    pub const fn stage_index(self) -> Option<usize> {
        match self {
            Self::Stage(n) => (n as usize).checked_sub(1),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_stage(self) -> bool {
        matches!(self, Self::Stage(_))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Landing => f.write_str("landing"),
            Self::QuestMap => f.write_str("quest-map"),
            Self::Stage(n) => write!(f, "stage{n}"),
            Self::Completion => f.write_str("completion"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized section id: {0}")]
pub struct ParseSectionError(String);

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landing" => Ok(Self::Landing),
            "quest-map" => Ok(Self::QuestMap),
            "completion" => Ok(Self::Completion),
            _ => s
                .strip_prefix("stage")
                .and_then(|digits| digits.parse::<u8>().ok())
                .filter(|n| *n >= 1)
                .map(Self::Stage)
                .ok_or_else(|| ParseSectionError(s.to_string())),
        }
    }
}
