use std::collections::{BTreeMap, HashSet};

use tagmap_entities::{item::*, percent::Percent, tag::*};

use crate::util::sort::SortByCoverage;

/// The tagged items of a course as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDataset {
    pub resources: Vec<RawItem>,
    pub questions: Vec<RawItem>,
}

/// Back-references from a single tag to the items carrying it.
///
/// The references are indices into [`Dataset::resources`]
/// and [`Dataset::questions`] in item-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEntry {
    resources: Vec<usize>,
    questions: Vec<usize>,
}

impl TagEntry {
    pub fn indices(&self, kind: ItemKind) -> &[usize] {
        match kind {
            ItemKind::Resource => &self.resources,
            ItemKind::Question => &self.questions,
        }
    }

    pub fn count(&self, kind: ItemKind) -> TagCount {
        self.indices(kind).len()
    }

    pub fn resource_count(&self) -> TagCount {
        self.resources.len()
    }

    pub fn question_count(&self) -> TagCount {
        self.questions.len()
    }

    fn push(&mut self, kind: ItemKind, index: usize) {
        match kind {
            ItemKind::Resource => self.resources.push(index),
            ItemKind::Question => self.questions.push(index),
        }
    }
}

/// The enriched, read-only dataset of a session.
///
/// A `Dataset` can only be created by [`Dataset::transform`]
/// and cannot be modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    resources: Vec<Item>,
    questions: Vec<Item>,
    tags: BTreeMap<TagName, TagEntry>,
    max_resources_per_tag: Option<TagCount>,
    max_questions_per_tag: Option<TagCount>,
}

impl Dataset {
    /// Index all tags and annotate every item.
    ///
    /// Repeated tags of a single item are collapsed into
    /// their first occurrence.
    pub fn transform(raw: RawDataset) -> Self {
        let RawDataset {
            resources,
            questions,
        } = raw;
        let resources: Vec<_> = resources.into_iter().map(dedup_tags).collect();
        let questions: Vec<_> = questions.into_iter().map(dedup_tags).collect();

        let mut tags = BTreeMap::<TagName, TagEntry>::new();
        for (kind, items) in [
            (ItemKind::Resource, &resources),
            (ItemKind::Question, &questions),
        ] {
            for (index, item) in items.iter().enumerate() {
                for tag in &item.tags {
                    tags.entry(tag.clone()).or_default().push(kind, index);
                }
            }
        }

        let max_resources_per_tag = tags.values().map(TagEntry::resource_count).max();
        let max_questions_per_tag = tags.values().map(TagEntry::question_count).max();

        let resources: Vec<_> = resources
            .into_iter()
            .map(|item| annotate(item, ItemKind::Resource, &tags))
            .collect();
        let questions: Vec<_> = questions
            .into_iter()
            .map(|item| annotate(item, ItemKind::Question, &tags))
            .collect();

        log::debug!(
            "Indexed {} tags of {} resources and {} questions",
            tags.len(),
            resources.len(),
            questions.len()
        );

        Self {
            resources,
            questions,
            tags,
            max_resources_per_tag,
            max_questions_per_tag,
        }
    }

    pub fn resources(&self) -> &[Item] {
        &self.resources
    }

    pub fn questions(&self) -> &[Item] {
        &self.questions
    }

    pub fn items(&self, kind: ItemKind) -> &[Item] {
        match kind {
            ItemKind::Resource => &self.resources,
            ItemKind::Question => &self.questions,
        }
    }

    /// All tags ordered by name.
    pub fn tags(&self) -> impl Iterator<Item = (&TagName, &TagEntry)> {
        self.tags.iter()
    }

    pub fn tag(&self, name: &str) -> Option<&TagEntry> {
        self.tags.get(name)
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.questions.is_empty()
    }

    /// Largest number of resources sharing a single tag.
    ///
    /// Returns `None` if there are no tags at all.
    pub const fn max_resources_per_tag(&self) -> Option<TagCount> {
        self.max_resources_per_tag
    }

    /// Largest number of questions sharing a single tag.
    ///
    /// Returns `None` if there are no tags at all.
    pub const fn max_questions_per_tag(&self) -> Option<TagCount> {
        self.max_questions_per_tag
    }

    pub const fn max_per_tag(&self, kind: ItemKind) -> Option<TagCount> {
        match kind {
            ItemKind::Resource => self.max_resources_per_tag,
            ItemKind::Question => self.max_questions_per_tag,
        }
    }

    /// Resolve the back-references of an entry.
    pub fn tagged_items<'a>(
        &'a self,
        entry: &'a TagEntry,
        kind: ItemKind,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        let items = self.items(kind);
        entry
            .indices(kind)
            .iter()
            .filter_map(move |index| items.get(*index))
    }
}

fn dedup_tags(mut item: RawItem) -> RawItem {
    let mut seen = HashSet::with_capacity(item.tags.len());
    item.tags.retain(|tag| seen.insert(tag.clone()));
    item
}

fn annotate(raw: RawItem, kind: ItemKind, tags: &BTreeMap<TagName, TagEntry>) -> Item {
    let RawItem { id, name, url, tags: raw_tags } = raw;
    let opposite = kind.opposite();
    let mut tag_refs: Vec<_> = raw_tags
        .into_iter()
        .map(|name| {
            let covered = tags.get(&name).is_some_and(|e| e.count(opposite) > 0);
            TagRef { name, covered }
        })
        .collect();
    tag_refs.sort_by_coverage();
    let covered = tag_refs.iter().filter(|t| t.covered).count();
    let coverage = Percent::of(covered, tag_refs.len());
    Item {
        kind,
        id,
        name,
        url,
        tags: tag_refs,
        coverage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagmap_entities::builders::*;

    fn item(id: &str, tags: &[&str]) -> RawItem {
        RawItem::build()
            .id(id)
            .name(id)
            .url(&format!("https://lms.example/{id}"))
            .tags(tags.iter().copied())
            .finish()
    }

    fn dataset(resources: &[(&str, &[&str])], questions: &[(&str, &[&str])]) -> Dataset {
        let raw = RawDataset {
            resources: resources.iter().map(|(id, t)| item(id, t)).collect(),
            questions: questions.iter().map(|(id, t)| item(id, t)).collect(),
        };
        Dataset::transform(raw)
    }

    fn ids<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<&'a str> {
        items.map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn index_and_annotate_single_resource_and_question() {
        let ds = dataset(&[("R", &["a", "b"])], &[("Q", &["a"])]);

        let a = ds.tag("a").unwrap();
        assert_eq!(ids(ds.tagged_items(a, ItemKind::Resource)), ["R"]);
        assert_eq!(ids(ds.tagged_items(a, ItemKind::Question)), ["Q"]);

        let b = ds.tag("b").unwrap();
        assert_eq!(ids(ds.tagged_items(b, ItemKind::Resource)), ["R"]);
        assert_eq!(b.question_count(), 0);

        let r = &ds.resources()[0];
        assert_eq!(r.kind, ItemKind::Resource);
        assert_eq!(r.tags, [TagRef::new("a", true), TagRef::new("b", false)]);
        assert_eq!(r.coverage.value(), 50);

        let q = &ds.questions()[0];
        assert_eq!(q.kind, ItemKind::Question);
        assert_eq!(q.tags, [TagRef::new("a", true)]);
        assert_eq!(q.coverage.value(), 100);
    }

    #[test]
    fn every_item_tag_has_an_entry() {
        let ds = dataset(
            &[("R1", &["x", "y"]), ("R2", &["y"])],
            &[("Q1", &["y", "z"]), ("Q2", &[])],
        );
        for kind in [ItemKind::Resource, ItemKind::Question] {
            for (index, item) in ds.items(kind).iter().enumerate() {
                for tag in &item.tags {
                    let entry = ds.tag(tag.name.as_str()).unwrap();
                    assert!(entry.indices(kind).contains(&index));
                }
            }
        }
        for (name, entry) in ds.tags() {
            for kind in [ItemKind::Resource, ItemKind::Question] {
                assert!(ds.tagged_items(entry, kind).all(|i| i.has_tag(name.as_str())));
            }
        }
        assert_eq!(ds.tag_count(), 3);
    }

    #[test]
    fn collapse_repeated_tags_of_an_item() {
        let ds = dataset(&[("R", &["a", "a", "b"])], &[]);
        assert_eq!(ds.tag("a").unwrap().resource_count(), 1);
        assert_eq!(ds.resources()[0].tags.len(), 2);
    }

    #[test]
    fn tag_names_are_case_sensitive() {
        let ds = dataset(&[("R", &["Rust"])], &[("Q", &["rust"])]);
        assert_eq!(ds.tag_count(), 2);
        assert!(!ds.resources()[0].tags[0].covered);
        assert!(!ds.questions()[0].tags[0].covered);
    }

    #[test]
    fn max_counts_per_tag() {
        let ds = dataset(
            &[("R1", &["a", "b"]), ("R2", &["a"]), ("R3", &["a", "c"])],
            &[("Q1", &["b"]), ("Q2", &["b", "c"]), ("Q3", &["c"])],
        );
        assert_eq!(ds.max_resources_per_tag(), Some(3));
        assert_eq!(ds.max_questions_per_tag(), Some(2));
        assert_eq!(ds.max_per_tag(ItemKind::Question), Some(2));
    }

    #[test]
    fn raising_a_smaller_count_keeps_the_max() {
        let before = dataset(&[], &[("Q1", &["a", "b"]), ("Q2", &["a"]), ("Q3", &["a"])]);
        let after = dataset(
            &[],
            &[("Q1", &["a", "b"]), ("Q2", &["a", "b"]), ("Q3", &["a"])],
        );
        assert_eq!(before.max_questions_per_tag(), Some(3));
        assert_eq!(after.max_questions_per_tag(), Some(3));
    }

    #[test]
    fn item_without_tags_has_zero_coverage() {
        let ds = dataset(&[("R", &[])], &[("Q", &["a"])]);
        assert_eq!(ds.resources()[0].coverage, Percent::ZERO);
        assert_eq!(ds.questions()[0].coverage, Percent::ZERO);
    }

    #[test]
    fn sort_annotated_tags_covered_first() {
        let ds = dataset(
            &[("R", &["zebra", "Apple", "mango", "Zulu"])],
            &[("Q", &["Zulu", "mango"])],
        );
        let names: Vec<_> = ds.resources()[0]
            .tags
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, ["mango", "Zulu", "Apple", "zebra"]);
        assert_eq!(ds.resources()[0].coverage.value(), 50);
    }

    #[test]
    fn empty_dataset() {
        let ds = Dataset::transform(RawDataset::default());
        assert!(ds.is_empty());
        assert_eq!(ds.tag_count(), 0);
        assert_eq!(ds.max_resources_per_tag(), None);
        assert_eq!(ds.max_questions_per_tag(), None);
    }
}
