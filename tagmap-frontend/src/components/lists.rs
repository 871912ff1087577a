use leptos::*;

use tagmap_boundary::{CoverageQuestion, QuestionCoverage, ResourceUsage, UsageResource};

#[component]
pub fn TagBadge(name: String, covered: bool, on_select: Callback<String>) -> impl IntoView {
    let class = if covered {
        "badge covered"
    } else {
        "badge uncovered"
    };
    let label = name.clone();
    view! {
      <span class=class on:click = move |_| on_select.call(name.clone())>{ label }</span>
    }
}

#[component]
pub fn ResourceRow(resource: UsageResource, on_select: Callback<String>) -> impl IntoView {
    let UsageResource {
        name,
        url,
        tags,
        tag_usage,
        ..
    } = resource;
    view! {
      <tr>
        <td><a href=url>{ name }</a></td>
        <td>
          { tags
              .into_iter()
              .map(|t| view! { <TagBadge name = t.name covered = t.used on_select /> })
              .collect_view()
          }
        </td>
        <td class="percent">{ tag_usage }"%"</td>
      </tr>
    }
}

#[component]
pub fn QuestionRow(question: CoverageQuestion, on_select: Callback<String>) -> impl IntoView {
    let CoverageQuestion {
        name,
        url,
        tags,
        tag_coverage,
        ..
    } = question;
    view! {
      <tr>
        <td><a href=url>{ name }</a></td>
        <td>
          { tags
              .into_iter()
              .map(|t| view! { <TagBadge name = t.name covered = t.covered on_select /> })
              .collect_view()
          }
        </td>
        <td class="percent">{ tag_coverage }"%"</td>
      </tr>
    }
}

#[component]
pub fn ResourceUsageList(list: ResourceUsage, on_select: Callback<String>) -> impl IntoView {
    if list.resources.is_empty() {
        return view! { <p>"No resources"</p> }.into_view();
    }
    view! {
      <table class="resource-usage">
        <thead><tr><th>"Resource"</th><th>"Tags"</th><th>"Tag usage"</th></tr></thead>
        <tbody>
          { list.resources
              .into_iter()
              .map(|resource| view! { <ResourceRow resource on_select /> })
              .collect_view()
          }
        </tbody>
      </table>
    }
    .into_view()
}

#[component]
pub fn QuestionCoverageList(list: QuestionCoverage, on_select: Callback<String>) -> impl IntoView {
    if list.questions.is_empty() {
        return view! { <p>"No questions"</p> }.into_view();
    }
    view! {
      <table class="question-coverage">
        <thead><tr><th>"Question"</th><th>"Tags"</th><th>"Tag coverage"</th></tr></thead>
        <tbody>
          { list.questions
              .into_iter()
              .map(|question| view! { <QuestionRow question on_select /> })
              .collect_view()
          }
        </tbody>
      </table>
    }
    .into_view()
}
