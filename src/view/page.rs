use maud::{html, Markup, PreEscaped, DOCTYPE};
use tagmap_boundary::{QuestionCoverage, ResourceUsage};

use super::Style;

// Opens the dialog of a clicked cloud word or tag badge.
const SCRIPT: &str = r#"
document.addEventListener("click", (ev) => {
  const el = ev.target.closest("[data-modal]");
  if (el) {
    const dialog = document.getElementById(el.dataset.modal);
    if (dialog) dialog.showModal();
  }
});
"#;

pub struct Report<'a> {
    pub title: &'a str,
    pub resource_cloud: Markup,
    pub question_cloud: Markup,
    pub resource_list: Markup,
    pub question_list: Markup,
    pub modals: Vec<Markup>,
    pub style: &'a Style,
}

pub fn report(r: Report<'_>) -> Markup {
    page(
        r.title,
        r.style,
        html! {
            h1 { (r.title) }
            section class="clouds" {
                figure {
                    figcaption { "Tags by resources" }
                    (r.resource_cloud)
                }
                figure {
                    figcaption { "Tags by questions" }
                    (r.question_cloud)
                }
            }
            section class="lists" {
                div {
                    h2 { "Resource usage" }
                    p class="description" { (ResourceUsage::DESCRIPTION) }
                    (r.resource_list)
                }
                div {
                    h2 { "Question coverage" }
                    p class="description" { (QuestionCoverage::DESCRIPTION) }
                    (r.question_list)
                }
            }
            @for m in &r.modals {
                (m)
            }
        },
    )
}

fn stylesheet(style: &Style) -> String {
    format!(
        r#"
body {{ font-family: {font}, sans-serif; margin: 1em 2em; }}
.clouds {{ display: flex; flex-wrap: wrap; gap: 2em; }}
.lists {{ display: flex; flex-wrap: wrap; gap: 2em; }}
.cloud text {{ cursor: pointer; transition: fill {ms}ms; }}
.cloud text:hover {{ fill: {highlight}; }}
.badge {{ display: inline-block; margin: 0 .2em .2em 0; padding: 0 .4em; border-radius: .6em; color: #fff; cursor: pointer; }}
.badge.covered {{ background: {covered}; }}
.badge.uncovered {{ background: {uncovered}; }}
.render-error {{ color: {uncovered}; }}
.description {{ color: #555; }}
"#,
        font = style.font_family,
        ms = style.transition.as_millis(),
        highlight = style.palette.highlight,
        covered = style.palette.covered,
        uncovered = style.palette.uncovered,
    )
}

pub fn page(title: &str, style: &Style, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head{
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            title {(title)}
            style { (PreEscaped(stylesheet(style))) }
        }
        body{
            (content)
            script { (PreEscaped(SCRIPT)) }
        }
    }
}
