use gloo_net::http::Request;

use tagmap_boundary::{GraphData, GraphDataRequest, GraphDataResponse};

use crate::{into_json, Result};

/// Public TagMap API of the host
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    /// Fetch the tagged resources and questions of a course.
    ///
    /// An error that is reported inside of a successful
    /// response is returned as [`crate::Error::Api`].
    pub async fn graph_data(&self, course_id: u64) -> Result<GraphData> {
        let url = format!("{}/graph-data", self.url);
        let request = GraphDataRequest {
            courseid: course_id,
        };
        let response = Request::post(&url).json(&request)?.send().await?;
        let response: GraphDataResponse = into_json(response).await?;
        Ok(response.into_result()?)
    }
}
