use dungeon_copilot_engine::SectionId;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/map")]
    QuestMap,
    #[at("/stage/:n")]
    Stage { n: u8 },
    #[at("/complete")]
    Completion,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_section(section: SectionId) -> Self {
        match section {
            SectionId::Landing => Self::Home,
            SectionId::QuestMap => Self::QuestMap,
            SectionId::Stage(n) => Self::Stage { n },
            SectionId::Completion => Self::Completion,
        }
    }

    #[must_use]
    pub const fn to_section(&self) -> Option<SectionId> {
        match self {
            Self::Home => Some(SectionId::Landing),
            Self::QuestMap => Some(SectionId::QuestMap),
            Self::Stage { n } => Some(SectionId::Stage(*n)),
            Self::Completion => Some(SectionId::Completion),
            Self::NotFound => None, // Preserve current section on 404 routes.
        }
    }
}
