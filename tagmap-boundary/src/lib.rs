use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

// -- graph data -- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct GraphDataRequest {
    pub courseid: u64,
}

/// A resource or question as it is delivered by the host.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct TaggedItem {
    pub id   : String,
    pub name : String,
    pub url  : String,
    pub tags : Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct GraphData {
    pub resources: Vec<TaggedItem>,
    pub questions: Vec<TaggedItem>,
}

/// Either the graph data or the error reported by the host.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum GraphDataResponse {
    Failure { error: HostError },
    Success(GraphData),
}

impl GraphDataResponse {
    pub fn into_result(self) -> Result<GraphData, Error> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure { error } => Err(Error {
                http_status: 200,
                message: error.exception.message,
            }),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct HostError {
    pub exception: HostException,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct HostException {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{message} ({http_status})"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

// -- render requests -- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct UsedTag {
    pub name: String,
    pub used: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct CoveredTag {
    pub name: String,
    pub covered: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct UsageResource {
    pub id: String,
    pub name: String,
    pub url: String,
    pub tags: Vec<UsedTag>,
    /// Percentage of tags that are used by questions.
    pub tag_usage: u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct CoverageQuestion {
    pub id: String,
    pub name: String,
    pub url: String,
    pub tags: Vec<CoveredTag>,
    /// Percentage of tags that are covered by resources.
    pub tag_coverage: u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ResourceUsage {
    pub resources: Vec<UsageResource>,
}

impl ResourceUsage {
    pub const DESCRIPTION: &'static str =
        "This tab shows for each resource how many tags have been used in questions.";
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct QuestionCoverage {
    pub questions: Vec<CoverageQuestion>,
}

impl QuestionCoverage {
    pub const DESCRIPTION: &'static str =
        "This tab shows for each question how many tags have been covered in resources.";
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct TagModal {
    pub tag: String,
    pub resources: Vec<UsageResource>,
    pub questions: Vec<CoverageQuestion>,
    pub num_resources: usize,
    pub num_questions: usize,
}

// -- layout -- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CloudWord {
    pub text: String,
    pub weight: f64,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CloudLayout {
    pub cloud: String,
    pub width: f64,
    pub height: f64,
    pub words: Vec<CloudWord>,
    pub dropped: Vec<String>,
}
