use maud::Markup;
use std::sync::Arc;
use tokio::task::{self, JoinHandle};

use tagmap_core::{
    cloud::{CloudKind, TagCloud},
    dataset::Dataset,
    layout::{ApproxTextMetrics, CloudLayout},
    CourseId, GraphDataGateway,
};

use tagmap_boundary::{QuestionCoverage, ResourceUsage, TagModal};

use crate::view::{self, ListTemplates, Style};

/// A loaded course with both clouds laid out.
pub struct Session {
    course_id: CourseId,
    dataset: Arc<Dataset>,
    resource_cloud: TagCloud,
    question_cloud: TagCloud,
}

fn spawn_layout(dataset: Arc<Dataset>, kind: CloudKind, layout: CloudLayout) -> JoinHandle<TagCloud> {
    task::spawn_blocking(move || {
        TagCloud::new(&dataset, kind, layout, &ApproxTextMetrics::default())
    })
}

impl Session {
    /// Fetch the dataset of a course once and lay out both clouds.
    ///
    /// Returns `None` if the data could not be fetched.
    pub async fn init<G>(gateway: &G, course_id: CourseId, layout: CloudLayout) -> Option<Self>
    where
        G: GraphDataGateway + ?Sized,
    {
        let raw = match gateway.graph_data(course_id) {
            Ok(raw) => raw,
            Err(err) => {
                log::error!("Unable to load the graph data of course {course_id}: {err}");
                return None;
            }
        };
        let dataset = Arc::new(Dataset::transform(raw));
        let resources = spawn_layout(
            Arc::clone(&dataset),
            CloudKind::ResourceCentric,
            layout.clone(),
        );
        let questions = spawn_layout(Arc::clone(&dataset), CloudKind::QuestionCentric, layout);
        let (resource_cloud, question_cloud) = match tokio::try_join!(resources, questions) {
            Ok(clouds) => clouds,
            Err(err) => {
                log::error!("Unable to lay out the clouds of course {course_id}: {err}");
                return None;
            }
        };
        Some(Self {
            course_id,
            dataset,
            resource_cloud,
            question_cloud,
        })
    }

    pub const fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub const fn cloud(&self, kind: CloudKind) -> &TagCloud {
        match kind {
            CloudKind::ResourceCentric => &self.resource_cloud,
            CloudKind::QuestionCentric => &self.question_cloud,
        }
    }

    /// Render the complete report page.
    ///
    /// A list that fails to render is replaced by its error message.
    pub fn render<T>(&self, templates: &T, style: &Style) -> Markup
    where
        T: ListTemplates + ?Sized,
    {
        let ds = self.dataset();
        let resource_list = templates
            .resource_usage(&ResourceUsage::from(ds))
            .unwrap_or_else(|err| {
                log::warn!("{err}");
                view::render_error(&err)
            });
        let question_list = templates
            .question_coverage(&QuestionCoverage::from(ds))
            .unwrap_or_else(|err| {
                log::warn!("{err}");
                view::render_error(&err)
            });
        let modals = ds
            .tags()
            .map(|(name, _)| view::tag_modal(&TagModal::from(&ds.tag_details(name.as_str()))))
            .collect();
        let title = format!("TagMap of course {}", self.course_id);
        view::report(view::Report {
            title: &title,
            resource_cloud: view::cloud(ds, &self.resource_cloud, style),
            question_cloud: view::cloud(ds, &self.question_cloud, style),
            resource_list,
            question_list,
            modals,
            style,
        })
    }
}
