use std::time::Duration;
use strum::{Display, EnumString, IntoStaticStr};

use tagmap_entities::{color::Rgb, item::ItemKind};

use crate::{
    color::{interpolate, ratio},
    dataset::Dataset,
    layout::{CloudLayout, Placement, TextMetrics, Word, WordDatum},
};

/// Duration of the hover color transition of a cloud word.
pub const HIGHLIGHT_TRANSITION: Duration = Duration::from_millis(150);

/// The two clouds of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum CloudKind {
    /// Sized by the number of resources per tag,
    /// colored by the number of questions.
    #[strum(serialize = "resources")]
    ResourceCentric,
    /// Sized by the number of questions per tag,
    /// colored by the presence of resources.
    #[strum(serialize = "questions")]
    QuestionCentric,
}

impl CloudKind {
    pub const ALL: [Self; 2] = [Self::ResourceCentric, Self::QuestionCentric];

    /// The kind of items that determines the weight of a tag.
    pub const fn weighted_by(self) -> ItemKind {
        match self {
            Self::ResourceCentric => ItemKind::Resource,
            Self::QuestionCentric => ItemKind::Question,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Weighted words of a cloud in tag order.
///
/// Tags that none of the weighted items carry are left out
/// since their label would have a font size of zero.
pub fn words(dataset: &Dataset, kind: CloudKind) -> Vec<Word> {
    let weighted_by = kind.weighted_by();
    dataset
        .tags()
        .filter_map(|(name, entry)| {
            let count = entry.count(weighted_by);
            #[allow(clippy::cast_precision_loss)]
            let weight = count as f64;
            (count > 0).then(|| Word::new(name.as_str(), weight))
        })
        .collect()
}

/// Colors used to paint the clouds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Resource-centric tag without any questions.
    pub coverage_low: Rgb,
    /// Resource-centric tag with the most questions.
    pub coverage_high: Rgb,
    /// Question-centric tag carried by at least one resource.
    pub covered: Rgb,
    /// Question-centric tag without resources.
    pub uncovered: Rgb,
    /// Hovered word.
    pub highlight: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            coverage_low: Rgb::new(0x77, 0x77, 0x77),
            coverage_high: Rgb::new(0x00, 0xff, 0x00),
            covered: Rgb::new(0x2c, 0xa0, 0x2c),
            uncovered: Rgb::new(0xd6, 0x27, 0x28),
            highlight: Rgb::new(0xff, 0xa5, 0x00),
        }
    }
}

impl Palette {
    /// The fill color of a tag word.
    ///
    /// Unknown tags are colored like tags without any items.
    pub fn tag_color(&self, dataset: &Dataset, kind: CloudKind, tag: &str) -> Rgb {
        let entry = dataset.tag(tag);
        match kind {
            CloudKind::ResourceCentric => {
                let questions = entry.map_or(0, |e| e.question_count());
                let r = ratio(questions, dataset.max_questions_per_tag());
                interpolate(r, self.coverage_low, self.coverage_high)
            }
            CloudKind::QuestionCentric => {
                if entry.is_some_and(|e| e.resource_count() > 0) {
                    self.covered
                } else {
                    self.uncovered
                }
            }
        }
    }
}

/// A laid out cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct TagCloud {
    pub kind: CloudKind,
    pub layout: CloudLayout,
    pub placement: Placement,
}

impl TagCloud {
    pub fn new<M>(dataset: &Dataset, kind: CloudKind, layout: CloudLayout, metrics: &M) -> Self
    where
        M: TextMetrics + ?Sized,
    {
        let words = words(dataset, kind);
        let placement = layout.place(&words, metrics);
        log::debug!(
            "Laid out {kind} cloud with {} of {} words",
            placement.placed.len(),
            words.len()
        );
        Self {
            kind,
            layout,
            placement,
        }
    }

    pub fn words(&self) -> &[WordDatum] {
        &self.placement.placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset::RawDataset, layout::ApproxTextMetrics};
    use tagmap_entities::{builders::*, item::RawItem};

    fn item(id: &str, tags: &[&str]) -> RawItem {
        RawItem::build().id(id).tags(tags.iter().copied()).finish()
    }

    fn sample() -> Dataset {
        Dataset::transform(RawDataset {
            resources: vec![
                item("R1", &["algebra", "graphs"]),
                item("R2", &["algebra", "proofs"]),
            ],
            questions: vec![
                item("Q1", &["algebra"]),
                item("Q2", &["algebra", "graphs"]),
                item("Q3", &["limits"]),
            ],
        })
    }

    #[test]
    fn weight_words_by_item_kind() {
        let ds = sample();
        assert_eq!(
            words(&ds, CloudKind::ResourceCentric),
            [
                Word::new("algebra", 2.0),
                Word::new("graphs", 1.0),
                Word::new("proofs", 1.0)
            ]
        );
        assert_eq!(
            words(&ds, CloudKind::QuestionCentric),
            [
                Word::new("algebra", 2.0),
                Word::new("graphs", 1.0),
                Word::new("limits", 1.0)
            ]
        );
    }

    #[test]
    fn resource_centric_gradient() {
        let ds = sample();
        let p = Palette::default();
        let kind = CloudKind::ResourceCentric;
        assert_eq!(p.tag_color(&ds, kind, "algebra"), p.coverage_high);
        assert_eq!(p.tag_color(&ds, kind, "proofs"), p.coverage_low);
        let graphs = p.tag_color(&ds, kind, "graphs");
        assert_eq!(graphs, interpolate(0.5, p.coverage_low, p.coverage_high));
        assert_ne!(graphs, p.coverage_low);
        assert_ne!(graphs, p.coverage_high);
    }

    #[test]
    fn question_centric_is_binary() {
        let ds = sample();
        let p = Palette::default();
        let kind = CloudKind::QuestionCentric;
        assert_eq!(p.tag_color(&ds, kind, "algebra").to_hex(), "#2ca02c");
        assert_eq!(p.tag_color(&ds, kind, "limits").to_hex(), "#d62728");
    }

    #[test]
    fn without_questions_everything_is_low() {
        let ds = Dataset::transform(RawDataset {
            resources: vec![item("R1", &["a"])],
            questions: vec![],
        });
        assert_eq!(ds.max_questions_per_tag(), Some(0));
        let p = Palette::default();
        assert_eq!(
            p.tag_color(&ds, CloudKind::ResourceCentric, "a"),
            p.coverage_low
        );
    }

    #[test]
    fn cloud_kind_names() {
        assert_eq!(CloudKind::ResourceCentric.name(), "resources");
        assert_eq!(CloudKind::QuestionCentric.to_string(), "questions");
        assert_eq!("questions".parse(), Ok(CloudKind::QuestionCentric));
        assert!("Questions".parse::<CloudKind>().is_err());
    }

    #[test]
    fn empty_dataset_yields_empty_clouds() {
        let ds = Dataset::transform(RawDataset::default());
        for kind in CloudKind::ALL {
            let cloud = TagCloud::new(
                &ds,
                kind,
                CloudLayout::new(400.0, 300.0),
                &ApproxTextMetrics::default(),
            );
            assert!(cloud.words().is_empty());
            assert!(cloud.placement.is_complete());
        }
    }

    #[test]
    fn lay_out_both_clouds() {
        let ds = sample();
        let metrics = ApproxTextMetrics::default();
        let layout = CloudLayout::new(600.0, 400.0);
        let resources = TagCloud::new(&ds, CloudKind::ResourceCentric, layout.clone(), &metrics);
        let questions = TagCloud::new(&ds, CloudKind::QuestionCentric, layout, &metrics);
        assert_eq!(resources.words().len(), 3);
        assert_eq!(questions.words().len(), 3);
        assert_eq!(resources.words()[0].text, "algebra");
        assert!((resources.words()[0].size - 20.0).abs() < f64::EPSILON);
    }
}
