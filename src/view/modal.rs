use maud::{html, Markup};
use tagmap_boundary::TagModal;

use super::{modal_id, question_row, resource_row};

/// A dialog with all resources and questions of a tag.
pub fn tag_modal(modal: &TagModal) -> Markup {
    let TagModal {
        tag,
        resources,
        questions,
        num_resources,
        num_questions,
    } = modal;
    html! {
        dialog id=(modal_id(tag)) class="tag-modal" {
            h3 { (tag) }
            p class="counts" {
                (num_resources) " resources, " (num_questions) " questions"
            }
            @if !resources.is_empty() {
                h4 { "Resources" }
                table { tbody { @for r in resources { (resource_row(r)) } } }
            }
            @if !questions.is_empty() {
                h4 { "Questions" }
                table { tbody { @for q in questions { (question_row(q)) } } }
            }
            form method="dialog" {
                button { "Close" }
            }
        }
    }
}
