use maud::{html, Markup};
use tagmap_core::{cloud::TagCloud, dataset::Dataset};

use super::{modal_id, Style};

/// An SVG with one centered text label per placed word.
pub fn cloud(dataset: &Dataset, cloud: &TagCloud, style: &Style) -> Markup {
    let Style {
        width,
        height,
        margin,
        font_family,
        palette,
        ..
    } = style;
    html! {
        svg
            class="cloud"
            xmlns="http://www.w3.org/2000/svg"
            width=(width)
            height=(height)
            data-cloud=(cloud.kind.name())
        {
            g transform=(format!("translate({margin},{margin})")) {
                @for w in cloud.words() {
                    text
                        x=(w.x)
                        y=(w.y)
                        text-anchor="middle"
                        dominant-baseline="central"
                        font-family=(font_family)
                        font-size=(format!("{}px", w.size))
                        fill=(palette.tag_color(dataset, cloud.kind, &w.text).to_hex())
                        data-modal=(modal_id(&w.text))
                    {
                        (w.text)
                    }
                }
            }
        }
    }
}
