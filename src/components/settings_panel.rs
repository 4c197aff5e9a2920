//! Settings Panel
//!
//! Auto-save interval and the colour given to new lists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::Settings;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (open, set_open) = signal(false);
    let interval = RwSignal::new(String::new());
    let color = RwSignal::new(String::new());

    let show = move |_| {
        let current = store.settings().get_untracked();
        interval.set(current.auto_save_interval_secs.to_string());
        color.set(current.new_list_default_color);
        set_open.update(|o| *o = !*o);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(secs) = interval.get_untracked().trim().parse::<u32>() else {
            ctx.error("Auto-save interval must be a whole number of seconds");
            return;
        };
        let settings = Settings {
            auto_save_interval_secs: secs,
            new_list_default_color: color.get_untracked().to_uppercase(),
        };
        spawn_local(async move {
            match commands::save_settings(&settings).await {
                Ok(saved) => {
                    store.settings().set(saved);
                    set_open.set(false);
                    ctx.info("Settings saved");
                }
                Err(e) => ctx.error(e),
            }
        });
    };

    view! {
        <div class="settings-panel">
            <button class="settings-toggle" on:click=show>"Settings"</button>
            <Show when=move || open.get()>
                <form class="settings-form" on:submit=on_submit>
                    <label>
                        "Auto-save (s)"
                        <input
                            type="number"
                            min="5"
                            max="86400"
                            prop:value=move || interval.get()
                            on:input=move |ev| interval.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "New list colour"
                        <input
                            type="color"
                            prop:value=move || color.get()
                            on:input=move |ev| color.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit">"Save settings"</button>
                </form>
            </Show>
        </div>
    }
}
