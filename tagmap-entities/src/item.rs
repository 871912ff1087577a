use crate::{id::Id, percent::Percent, tag::*};

/// The two kinds of tagged items of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A learning resource (file, page, ...).
    Resource,
    /// An assessment question.
    Question,
}

impl ItemKind {
    /// The kind whose tags determine the coverage of this kind.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Resource => Self::Question,
            Self::Question => Self::Resource,
        }
    }
}

/// A tagged item as delivered by the host system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub id: Id,
    pub name: String,
    pub url: String,
    pub tags: Vec<TagName>,
}

/// A tagged item after all tags have been annotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub id: Id,
    pub name: String,
    pub url: String,
    /// Annotated tags, covered ones first.
    pub tags: Vec<TagRef>,
    /// Share of [`Item::tags`] that are covered.
    ///
    /// This is the *tag usage* of a resource or the
    /// *tag coverage* of a question. Items without
    /// any tags have a coverage of zero.
    pub coverage: Percent,
}

impl Item {
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name.as_str() == name)
    }
}
