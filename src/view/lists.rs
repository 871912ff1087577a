use maud::{html, Markup};
use tagmap_boundary::{
    CoverageQuestion, CoveredTag, QuestionCoverage, ResourceUsage, UsageResource, UsedTag,
};

use super::modal_id;

fn badge(name: &str, covered: bool) -> Markup {
    let class = if covered {
        "badge covered"
    } else {
        "badge uncovered"
    };
    html! {
        span class=(class) data-modal=(modal_id(name)) { (name) }
    }
}

pub fn used_tag_badge(tag: &UsedTag) -> Markup {
    badge(&tag.name, tag.used)
}

pub fn covered_tag_badge(tag: &CoveredTag) -> Markup {
    badge(&tag.name, tag.covered)
}

pub fn resource_row(r: &UsageResource) -> Markup {
    html! {
        tr {
            td { a href=(r.url) { (r.name) } }
            td { @for t in &r.tags { (used_tag_badge(t)) } }
            td class="percent" { (r.tag_usage) "%" }
        }
    }
}

pub fn question_row(q: &CoverageQuestion) -> Markup {
    html! {
        tr {
            td { a href=(q.url) { (q.name) } }
            td { @for t in &q.tags { (covered_tag_badge(t)) } }
            td class="percent" { (q.tag_coverage) "%" }
        }
    }
}

pub fn resource_usage_list(list: &ResourceUsage) -> Markup {
    html! {
        @if list.resources.is_empty() {
            p { "No resources" }
        } @else {
            table class="resource-usage" {
                thead { tr { th { "Resource" } th { "Tags" } th { "Tag usage" } } }
                tbody {
                    @for r in &list.resources {
                        (resource_row(r))
                    }
                }
            }
        }
    }
}

pub fn question_coverage_list(list: &QuestionCoverage) -> Markup {
    html! {
        @if list.questions.is_empty() {
            p { "No questions" }
        } @else {
            table class="question-coverage" {
                thead { tr { th { "Question" } th { "Tags" } th { "Tag coverage" } } }
                tbody {
                    @for q in &list.questions {
                        (question_row(q))
                    }
                }
            }
        }
    }
}
