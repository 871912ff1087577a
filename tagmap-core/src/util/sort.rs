use std::cmp::Ordering;

use tagmap_entities::tag::TagRef;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

pub trait SortByCoverage {
    /// Covered tags first, each group in alphabetical order.
    fn sort_by_coverage(&mut self);
}

impl SortByCoverage for [TagRef] {
    fn sort_by_coverage(&mut self) {
        self.sort_by(cmp_by_coverage);
    }
}

pub fn cmp_by_coverage(a: &TagRef, b: &TagRef) -> Ordering {
    b.covered
        .cmp(&a.covered)
        .then_with(|| cmp_names(a.name.as_str(), b.name.as_str()))
}

/// Locale-aware comparison of tag names.
///
/// Letters are compared without accents and case first, so `éclair`
/// sorts next to `eclair` and not after `z`. Names that only differ in
/// case put lowercase first. The exact string decides the rest.
pub fn cmp_names(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| base_letters(s).flat_map(char::to_lowercase).collect::<Vec<_>>();
    let case = |s: &str| base_letters(s).map(char::is_uppercase).collect::<Vec<_>>();
    primary(a)
        .cmp(&primary(b))
        .then_with(|| case(a).cmp(&case(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}
