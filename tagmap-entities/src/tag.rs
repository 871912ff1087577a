use std::{borrow::Borrow, fmt};

/// A free-text label attached to a resource or a question.
///
/// Tag names are opaque keys: two tags are the same tag if and only if
/// their strings are equal. No case folding or whitespace normalization
/// is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagName(String);

impl TagName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TagName {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for TagName {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<TagName> for String {
    fn from(from: TagName) -> Self {
        from.0
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TagName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tag of an item annotated with its cross-reference state.
///
/// For resources `covered` means that at least one question carries
/// the same tag ("used"), for questions it means that at least one
/// resource carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: TagName,
    pub covered: bool,
}

impl TagRef {
    pub fn new(name: impl Into<TagName>, covered: bool) -> Self {
        Self {
            name: name.into(),
            covered,
        }
    }
}

pub type TagCount = usize;
