use maud::{html, Markup};
use std::time::Duration;
use tagmap_boundary::{QuestionCoverage, ResourceUsage};
use tagmap_core::cloud::Palette;
use thiserror::Error;

mod cloud;
mod lists;
mod modal;
mod page;

pub use cloud::*;
pub use lists::*;
pub use modal::*;
pub use page::*;

/// Failure of a list template.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unable to render '{template}': {item} has a percentage of {value}")]
    InvalidPercent {
        template: &'static str,
        item: String,
        value: u8,
    },
}

fn check_percent(template: &'static str, item: &str, value: u8) -> Result<(), RenderError> {
    if value > 100 {
        return Err(RenderError::InvalidPercent {
            template,
            item: item.to_owned(),
            value,
        });
    }
    Ok(())
}

/// Templates of the two summary lists.
pub trait ListTemplates {
    fn resource_usage(&self, list: &ResourceUsage) -> Result<Markup, RenderError>;
    fn question_coverage(&self, list: &QuestionCoverage) -> Result<Markup, RenderError>;
}

/// The built-in list templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaudTemplates;

impl ListTemplates for MaudTemplates {
    fn resource_usage(&self, list: &ResourceUsage) -> Result<Markup, RenderError> {
        for r in &list.resources {
            check_percent("resource-usage", &r.id, r.tag_usage)?;
        }
        Ok(resource_usage_list(list))
    }
    fn question_coverage(&self, list: &QuestionCoverage) -> Result<Markup, RenderError> {
        for q in &list.questions {
            check_percent("question-coverage", &q.id, q.tag_coverage)?;
        }
        Ok(question_coverage_list(list))
    }
}

/// Visual settings of a report.
#[derive(Debug, Clone)]
pub struct Style {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub font_family: String,
    pub palette: Palette,
    pub transition: Duration,
}

pub fn render_error(err: &RenderError) -> Markup {
    html! {
        p class="render-error" { (err.to_string()) }
    }
}

/// Id of the dialog element that shows the details of a tag.
///
/// Tag names are arbitrary strings so they are hex encoded.
pub fn modal_id(tag: &str) -> String {
    let hex: String = tag.bytes().map(|b| format!("{b:02x}")).collect();
    format!("tag-{hex}")
}
