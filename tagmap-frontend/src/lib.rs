use std::rc::Rc;

use leptos::*;

use tagmap_boundary::{GraphData, QuestionCoverage, ResourceUsage, TagModal};
use tagmap_core::{
    cloud::{CloudKind, Palette, TagCloud},
    dataset::{Dataset, RawDataset},
    layout::{ApproxTextMetrics, CloudLayout},
};
use tagmap_frontend_api as api;

mod components;
use components::*;

const DEFAULT_API_URL: &str = "/api";

const CLOUD_WIDTH: f64 = 800.0;
const CLOUD_HEIGHT: f64 = 500.0;
const CLOUD_MARGIN: f64 = 10.0;

/// A fetched course with both clouds laid out.
pub struct Session {
    pub dataset: Dataset,
    pub resource_cloud: TagCloud,
    pub question_cloud: TagCloud,
    pub palette: Palette,
}

impl Session {
    fn new(data: GraphData) -> Self {
        let dataset = Dataset::transform(RawDataset::from(data));
        let layout = CloudLayout::new(
            CLOUD_WIDTH - 2.0 * CLOUD_MARGIN,
            CLOUD_HEIGHT - 2.0 * CLOUD_MARGIN,
        );
        let metrics = ApproxTextMetrics::default();
        let resource_cloud = TagCloud::new(
            &dataset,
            CloudKind::ResourceCentric,
            layout.clone(),
            &metrics,
        );
        let question_cloud = TagCloud::new(&dataset, CloudKind::QuestionCentric, layout, &metrics);
        Self {
            dataset,
            resource_cloud,
            question_cloud,
            palette: Palette::default(),
        }
    }

    const fn cloud(&self, kind: CloudKind) -> &TagCloud {
        match kind {
            CloudKind::ResourceCentric => &self.resource_cloud,
            CloudKind::QuestionCentric => &self.question_cloud,
        }
    }
}

/// Extract the course ID from a query string like `?course=42`.
fn course_id_from_query(query: &str) -> Option<u64> {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("course="))
        .and_then(|id| id.parse().ok())
}

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let session = RwSignal::new(None::<Rc<Session>>);
    let selected_tag = RwSignal::new(None::<String>);
    let fetch_error = RwSignal::new(None::<String>);

    let modal = Signal::derive(move || {
        let tag = selected_tag.get()?;
        session.with(|s| {
            s.as_ref()
                .map(|s| TagModal::from(&s.dataset.tag_details(&tag)))
        })
    });

    // -- actions -- //

    let public_api = api::PublicApi::new(DEFAULT_API_URL.to_string());

    let fetch_graph_data = Action::new(move |course_id: &u64| {
        let course_id = *course_id;
        let api = public_api.clone();
        async move {
            match api.graph_data(course_id).await {
                Ok(data) => {
                    let s = Session::new(data);
                    log::info!(
                        "Loaded course {course_id} with {} tags",
                        s.dataset.tag_count()
                    );
                    session.set(Some(Rc::new(s)));
                }
                Err(err) => {
                    log::error!("Unable to fetch graph data of course {course_id}: {err}");
                    fetch_error.set(Some(err.to_string()));
                }
            }
        }
    });

    // -- callbacks -- //

    let on_select = Callback::new(move |tag: String| {
        log::debug!("Show details of tag '{tag}'");
        selected_tag.set(Some(tag));
    });

    let on_close = Callback::new(move |()| {
        selected_tag.set(None);
    });

    // -- init -- //

    let query = window().location().search().unwrap_or_default();
    match course_id_from_query(&query) {
        Some(course_id) => fetch_graph_data.dispatch(course_id),
        None => fetch_error.set(Some("No course selected".to_string())),
    }

    view! {
      <main>
        { move || fetch_error.get().map(|err| view! { <p class="error">{ err }</p> }) }
        { move || session.get().map(|s| view! {
            <section class="clouds">
              <WordCloud session = Rc::clone(&s) kind = CloudKind::ResourceCentric on_select />
              <WordCloud session = Rc::clone(&s) kind = CloudKind::QuestionCentric on_select />
            </section>
            <section class="lists">
              <div>
                <p class="description">{ ResourceUsage::DESCRIPTION }</p>
                <ResourceUsageList list = { ResourceUsage::from(&s.dataset) } on_select />
              </div>
              <div>
                <p class="description">{ QuestionCoverage::DESCRIPTION }</p>
                <QuestionCoverageList list = { QuestionCoverage::from(&s.dataset) } on_select />
              </div>
            </section>
          })
        }
        <TagModalView modal on_select on_close />
      </main>
    }
}

pub fn run() {
    mount_to_body(|| view! { <App /> });
}
