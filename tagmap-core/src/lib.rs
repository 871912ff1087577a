use thiserror::Error;

use crate::dataset::RawDataset;

pub mod cloud;
pub mod color;
pub mod dataset;
pub mod details;
pub mod layout;
pub mod util;

pub use tagmap_entities as entities;

/// Identifier of a course in the host system.
pub type CourseId = u64;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Unable to fetch graph data: {0}")]
    Fetch(String),
    #[error("Malformed graph data: {0}")]
    Malformed(String),
    #[error("The host reported an error: {0}")]
    Remote(String),
}

/// Source of the raw tagged items of a course.
pub trait GraphDataGateway {
    fn graph_data(&self, course_id: CourseId) -> Result<RawDataset, GatewayError>;
}
