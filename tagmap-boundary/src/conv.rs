use super::*;

use tagmap_entities::{
    item::{Item, RawItem},
    tag::TagRef,
};

impl From<TaggedItem> for RawItem {
    fn from(from: TaggedItem) -> Self {
        let TaggedItem {
            id,
            name,
            url,
            tags,
        } = from;
        Self {
            id: id.into(),
            name,
            url,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<RawItem> for TaggedItem {
    fn from(from: RawItem) -> Self {
        let RawItem {
            id,
            name,
            url,
            tags,
        } = from;
        Self {
            id: id.into(),
            name,
            url,
            tags: tags.into_iter().map(String::from).collect(),
        }
    }
}

impl From<&TagRef> for UsedTag {
    fn from(from: &TagRef) -> Self {
        Self {
            name: from.name.to_string(),
            used: from.covered,
        }
    }
}

impl From<&TagRef> for CoveredTag {
    fn from(from: &TagRef) -> Self {
        Self {
            name: from.name.to_string(),
            covered: from.covered,
        }
    }
}

impl From<&Item> for UsageResource {
    fn from(from: &Item) -> Self {
        Self {
            id: from.id.to_string(),
            name: from.name.clone(),
            url: from.url.clone(),
            tags: from.tags.iter().map(Into::into).collect(),
            tag_usage: from.coverage.value(),
        }
    }
}

impl From<&Item> for CoverageQuestion {
    fn from(from: &Item) -> Self {
        Self {
            id: from.id.to_string(),
            name: from.name.clone(),
            url: from.url.clone(),
            tags: from.tags.iter().map(Into::into).collect(),
            tag_coverage: from.coverage.value(),
        }
    }
}

#[cfg(feature = "core-conversions")]
mod core_types {
    use super::*;

    use tagmap_core::{
        cloud::TagCloud,
        dataset::{Dataset, RawDataset},
        details::TagDetails,
    };

    impl From<GraphData> for RawDataset {
        fn from(from: GraphData) -> Self {
            let GraphData {
                resources,
                questions,
            } = from;
            Self {
                resources: resources.into_iter().map(Into::into).collect(),
                questions: questions.into_iter().map(Into::into).collect(),
            }
        }
    }

    impl From<&Dataset> for ResourceUsage {
        fn from(from: &Dataset) -> Self {
            Self {
                resources: from.resources().iter().map(Into::into).collect(),
            }
        }
    }

    impl From<&Dataset> for QuestionCoverage {
        fn from(from: &Dataset) -> Self {
            Self {
                questions: from.questions().iter().map(Into::into).collect(),
            }
        }
    }

    impl From<&TagDetails<'_>> for TagModal {
        fn from(from: &TagDetails<'_>) -> Self {
            Self {
                tag: from.tag.to_owned(),
                resources: from.resources.iter().copied().map(Into::into).collect(),
                questions: from.questions.iter().copied().map(Into::into).collect(),
                num_resources: from.num_resources(),
                num_questions: from.num_questions(),
            }
        }
    }

    impl From<&TagCloud> for CloudLayout {
        fn from(from: &TagCloud) -> Self {
            let words = from
                .words()
                .iter()
                .map(|w| CloudWord {
                    text: w.text.clone(),
                    weight: w.weight,
                    size: w.size,
                    x: w.x,
                    y: w.y,
                    rotate: w.rotation,
                })
                .collect();
            let dropped = from
                .placement
                .dropped
                .iter()
                .map(|w| w.text.clone())
                .collect();
            Self {
                cloud: from.kind.to_string(),
                width: from.layout.width,
                height: from.layout.height,
                words,
                dropped,
            }
        }
    }

    #[cfg(all(test, feature = "extra-derive"))]
    mod tests {
        use super::*;
        use tagmap_core::{
            cloud::CloudKind,
            layout::{self, ApproxTextMetrics},
        };

        fn tagged_item(id: &str, tags: &[&str]) -> TaggedItem {
            TaggedItem {
                id: id.into(),
                name: format!("Item {id}"),
                url: format!("https://lms.example/{id}"),
                tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            }
        }

        fn sample() -> Dataset {
            Dataset::transform(RawDataset::from(GraphData {
                resources: vec![tagged_item("R1", &["a", "b"])],
                questions: vec![tagged_item("Q1", &["a"])],
            }))
        }

        #[test]
        fn transform_graph_data() {
            let ds = sample();
            let usage = ResourceUsage::from(&ds);
            assert_eq!(usage.resources.len(), 1);
            assert_eq!(usage.resources[0].tag_usage, 50);
            assert_eq!(
                usage.resources[0].tags,
                [
                    UsedTag {
                        name: "a".into(),
                        used: true
                    },
                    UsedTag {
                        name: "b".into(),
                        used: false
                    }
                ]
            );
            let coverage = QuestionCoverage::from(&ds);
            assert_eq!(coverage.questions[0].tag_coverage, 100);
        }

        #[test]
        fn modal_of_a_tag() {
            let ds = sample();
            let modal = TagModal::from(&ds.tag_details("a"));
            assert_eq!(modal.tag, "a");
            assert_eq!(modal.num_resources, 1);
            assert_eq!(modal.num_questions, 1);
            assert_eq!(modal.resources[0].id, "R1");
            assert_eq!(modal.questions[0].url, "https://lms.example/Q1");
        }

        #[test]
        fn modal_of_an_unknown_tag() {
            let ds = sample();
            let modal = TagModal::from(&ds.tag_details("zzz"));
            assert_eq!(modal.num_resources, 0);
            assert!(modal.questions.is_empty());
        }

        #[test]
        fn layout_of_a_cloud() {
            let ds = sample();
            let cloud = TagCloud::new(
                &ds,
                CloudKind::QuestionCentric,
                layout::CloudLayout::new(300.0, 200.0),
                &ApproxTextMetrics::default(),
            );
            let json = CloudLayout::from(&cloud);
            assert_eq!(json.cloud, "questions");
            assert_eq!(json.words.len(), 1);
            assert_eq!(json.words[0].text, "a");
            assert!(json.dropped.is_empty());
        }
    }
}
