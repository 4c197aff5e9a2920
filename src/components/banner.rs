//! Banner Component
//!
//! Transient message strip at the top of the window. Click to dismiss.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Banner() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.banner.get().map(|msg| {
            let class = msg.class();
            let text = msg.text;
            view! {
                <div class=class on:click=move |_| ctx.banner.set(None)>
                    {text}
                </div>
            }
        })
    }
}
