//! Delete Popup Component
//!
//! Modal yes/no prompt used before destructive actions.

use leptos::prelude::*;

/// Confirmation dialog
///
/// # Arguments
/// * `message` - Prompt to show; `None` hides the popup
/// * `on_answer` - Called with `true` on confirm, `false` on cancel or backdrop click
#[component]
pub fn DeletePopup(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_answer: Callback<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="popup-backdrop" on:click=move |_| on_answer.run(false)>
                <div class="popup" on:click=|ev| ev.stop_propagation()>
                    <p class="popup-text">{move || message.get().unwrap_or_default()}</p>
                    <div class="popup-actions">
                        <button
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_answer.run(true);
                            }
                        >
                            "Delete"
                        </button>
                        <button
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_answer.run(false);
                            }
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
