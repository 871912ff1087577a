use leptos::*;

use tagmap_boundary::TagModal;

use super::{QuestionRow, ResourceRow};

#[component]
pub fn TagModalView(
    modal: Signal<Option<TagModal>>,
    on_select: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    move || {
        modal.get().map(|m| {
            let TagModal {
                tag,
                resources,
                questions,
                num_resources,
                num_questions,
            } = m;
            view! {
              <div class="modal-backdrop" on:click = move |_| on_close.call(())>
                <div class="modal" on:click = |ev| ev.stop_propagation()>
                  <h3>{ tag }</h3>
                  <p class="counts">{ num_resources }" resources, "{ num_questions }" questions"</p>
                  <Show when = move || num_resources > 0>
                    <h4>"Resources"</h4>
                  </Show>
                  <table>
                    <tbody>
                      { resources
                          .into_iter()
                          .map(|resource| view! { <ResourceRow resource on_select /> })
                          .collect_view()
                      }
                    </tbody>
                  </table>
                  <Show when = move || num_questions > 0>
                    <h4>"Questions"</h4>
                  </Show>
                  <table>
                    <tbody>
                      { questions
                          .into_iter()
                          .map(|question| view! { <QuestionRow question on_select /> })
                          .collect_view()
                      }
                    </tbody>
                  </table>
                  <button on:click = move |_| on_close.call(())>"Close"</button>
                </div>
              </div>
            }
        })
    }
}
