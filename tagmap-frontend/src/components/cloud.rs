use std::rc::Rc;

use leptos::*;

use tagmap_core::{
    cloud::{CloudKind, HIGHLIGHT_TRANSITION},
    layout::WordDatum,
};

use crate::{Session, CLOUD_HEIGHT, CLOUD_MARGIN, CLOUD_WIDTH};

#[component]
pub fn WordCloud(
    session: Rc<Session>,
    kind: CloudKind,
    on_select: Callback<String>,
) -> impl IntoView {
    let words = session.cloud(kind).words().to_vec();
    view! {
      <svg class="cloud" width=CLOUD_WIDTH height=CLOUD_HEIGHT data-cloud=kind.name()>
        <g transform=format!("translate({CLOUD_MARGIN},{CLOUD_MARGIN})")>
          { words
              .into_iter()
              .map(|word| view! { <Word session = Rc::clone(&session) kind word on_select /> })
              .collect_view()
          }
        </g>
      </svg>
    }
}

#[component]
fn Word(
    session: Rc<Session>,
    kind: CloudKind,
    word: WordDatum,
    on_select: Callback<String>,
) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let WordDatum {
        text, size, x, y, ..
    } = word;

    let fill = {
        let text = text.clone();
        move || {
            let color = if hovered.get() {
                session.palette.highlight
            } else {
                // recomputed on every leave
                session.palette.tag_color(&session.dataset, kind, &text)
            };
            color.to_hex()
        }
    };
    let style = format!("transition: fill {}ms", HIGHLIGHT_TRANSITION.as_millis());

    view! {
      <text
        x=x
        y=y
        text-anchor="middle"
        dominant-baseline="central"
        font-family="Arial"
        font-size=format!("{size}px")
        fill=fill
        style=style
        on:mouseenter = move |_| hovered.set(true)
        on:mouseleave = move |_| hovered.set(false)
        on:click = {
            let text = text.clone();
            move |_| on_select.call(text.clone())
        }
      >
        { text }
      </text>
    }
}
