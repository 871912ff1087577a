use tagmap_entities::item::{Item, ItemKind};

use crate::dataset::Dataset;

/// Resources and questions that carry a selected tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDetails<'a> {
    pub tag: &'a str,
    pub resources: Vec<&'a Item>,
    pub questions: Vec<&'a Item>,
}

impl TagDetails<'_> {
    pub fn num_resources(&self) -> usize {
        self.resources.len()
    }

    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }
}

impl Dataset {
    /// Collect the details of a tag.
    ///
    /// Tags that are not part of the dataset have neither
    /// resources nor questions.
    pub fn tag_details<'a>(&'a self, tag: &'a str) -> TagDetails<'a> {
        let (resources, questions) = match self.tag(tag) {
            Some(entry) => (
                self.tagged_items(entry, ItemKind::Resource).collect(),
                self.tagged_items(entry, ItemKind::Question).collect(),
            ),
            None => (vec![], vec![]),
        };
        TagDetails {
            tag,
            resources,
            questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawDataset;
    use tagmap_entities::{builders::*, item::RawItem};

    fn item(id: &str, tags: &[&str]) -> RawItem {
        RawItem::build().id(id).name(id).tags(tags.iter().copied()).finish()
    }

    #[test]
    fn collect_resources_and_questions_of_a_tag() {
        let ds = Dataset::transform(RawDataset {
            resources: vec![item("R1", &["a"]), item("R2", &["b"]), item("R3", &["a"])],
            questions: vec![item("Q1", &["a", "b"])],
        });
        let details = ds.tag_details("a");
        assert_eq!(details.tag, "a");
        let resources: Vec<_> = details.resources.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(resources, ["R1", "R3"]);
        assert_eq!(details.num_resources(), 2);
        assert_eq!(details.num_questions(), 1);
        assert_eq!(details.questions[0].name, "Q1");
    }

    #[test]
    fn tag_without_questions() {
        let ds = Dataset::transform(RawDataset {
            resources: vec![item("R1", &["lonely"])],
            questions: vec![],
        });
        let details = ds.tag_details("lonely");
        assert_eq!(details.num_resources(), 1);
        assert_eq!(details.num_questions(), 0);
    }

    #[test]
    fn unknown_tag_has_no_items() {
        let ds = Dataset::transform(RawDataset::default());
        let details = ds.tag_details("missing");
        assert!(details.resources.is_empty());
        assert!(details.questions.is_empty());
    }
}
