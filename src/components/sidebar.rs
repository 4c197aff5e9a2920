//! Sidebar Component
//!
//! Project list, project creation, and the boards of the open project.
//! Its width doubles as the delete band for list drags.

use leptos::prelude::*;
use leptos::task::spawn_local;
use kanban_dnd::board::{add_board, remove_board, rename_board};

use super::delete_popup::DeletePopup;
use super::settings_panel::SettingsPanel;
use crate::app::save_open_project_now;
use crate::commands;
use crate::context::use_app_context;
use crate::models::ProjectInfo;
use crate::store::{
    store_open_project, store_remove_project, store_replace_project, store_upsert_info,
    use_app_store, AppStateStoreFields,
};

/// Something the user asked to delete, waiting for confirmation
#[derive(Clone, Debug, PartialEq)]
enum PendingDelete {
    Project { id: String, name: String },
    Board { index: usize, name: String },
}

pub fn row_class(base: &str, active: bool) -> String {
    if active {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let pending = RwSignal::new(None::<PendingDelete>);

    let open_project = move |id: String| {
        spawn_local(async move {
            // Unsaved edits must reach the backend before they are replaced
            if store.dirty().get_untracked() && !save_open_project_now(store, ctx).await {
                return;
            }
            match commands::get_project(&id).await {
                Ok(project) => {
                    web_sys::console::log_1(&format!("[APP] Opened project {}", project.name).into());
                    store_open_project(&store, project);
                }
                Err(e) => ctx.error(e),
            }
        });
    };

    let on_delete_answer = Callback::new(move |confirmed: bool| {
        let Some(target) = pending.get_untracked() else { return };
        pending.set(None);
        if !confirmed {
            return;
        }
        match target {
            PendingDelete::Project { id, .. } => {
                spawn_local(async move {
                    match commands::delete_project(&id).await {
                        Ok(()) => store_remove_project(&store, &id),
                        Err(e) => ctx.error(e),
                    }
                });
            }
            PendingDelete::Board { index, .. } => {
                let Some(project) = store.project().get_untracked() else { return };
                match remove_board(&project, index) {
                    Ok(next) => store_replace_project(&store, next),
                    Err(e) => ctx.error(e.to_string()),
                }
            }
        }
    });
    let delete_message = Signal::derive(move || {
        pending.get().map(|p| match p {
            PendingDelete::Project { name, .. } => format!("Delete project '{}'?", name),
            PendingDelete::Board { name, .. } => format!("Delete board '{}'?", name),
        })
    });

    let open_id = move || store.project().with(|p| p.as_ref().map(|p| p.id.clone()));

    view! {
        <aside class="sidebar">
            <h3 class="sidebar-title">"Projects"</h3>
            <div class="project-list">
                <For
                    each=move || store.projects().get()
                    key=|p: &ProjectInfo| (p.id.clone(), p.name.clone())
                    children=move |info: ProjectInfo| {
                        let id = info.id.clone();
                        let id_for_open = info.id.clone();
                        let id_for_delete = info.id.clone();
                        let name = info.name.clone();
                        let class = move || row_class("project-row", open_id().as_deref() == Some(id.as_str()));
                        view! {
                            <div
                                class=class
                                title=info.description.clone()
                                on:click=move |_| open_project(id_for_open.clone())
                            >
                                <span class="project-name">{info.name.clone()}</span>
                                <button
                                    class="delete-btn"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        pending.set(Some(PendingDelete::Project {
                                            id: id_for_delete.clone(),
                                            name: name.clone(),
                                        }));
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <NewProjectForm />

            <Show when=move || store.project().with(|p| p.is_some())>
                <BoardTabs pending=pending />
            </Show>

            <SettingsPanel />
            <DeletePopup message=delete_message on_answer=on_delete_answer />
        </aside>
    }
}

#[component]
fn NewProjectForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get_untracked();
        let description_value = description.get_untracked();
        spawn_local(async move {
            if store.dirty().get_untracked() && !save_open_project_now(store, ctx).await {
                return;
            }
            match commands::create_project(&name_value, &description_value).await {
                Ok(project) => {
                    set_name.set(String::new());
                    set_description.set(String::new());
                    store_upsert_info(&store, ProjectInfo::from(&project));
                    store_open_project(&store, project);
                }
                Err(e) => ctx.error(e),
            }
        });
    };

    view! {
        <form class="new-project-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Project name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Create"</button>
        </form>
    }
}

/// Boards of the open project
#[component]
fn BoardTabs(pending: RwSignal<Option<PendingDelete>>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (renaming, set_renaming) = signal(None::<usize>);
    let (draft, set_draft) = signal(String::new());
    let (new_name, set_new_name) = signal(String::new());

    let names = move || {
        store
            .project()
            .with(|p| p.as_ref().map(|p| p.boards.iter().map(|b| b.name.clone()).collect::<Vec<_>>()))
            .unwrap_or_default()
    };

    let commit_rename = move |index: usize| {
        if renaming.get_untracked() != Some(index) {
            return;
        }
        set_renaming.set(None);
        let Some(project) = store.project().get_untracked() else { return };
        match rename_board(&project, index, &draft.get_untracked()) {
            Ok(next) => store_replace_project(&store, next),
            Err(e) => ctx.error(e.to_string()),
        }
    };

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(project) = store.project().get_untracked() else { return };
        match add_board(&project, &new_name.get_untracked()) {
            Ok(next) => {
                let last = next.boards.len() - 1;
                store_replace_project(&store, next);
                store.board_index().set(Some(last));
                set_new_name.set(String::new());
            }
            Err(e) => ctx.error(e.to_string()),
        }
    };

    view! {
        <h3 class="sidebar-title">"Boards"</h3>
        <div class="board-tabs">
            {move || names().into_iter().enumerate().map(|(index, name)| {
                let active = move || store.board_index().get() == Some(index);
                let class = move || row_class("board-row", active());
                let shown = name.clone();
                let for_rename = name.clone();
                view! {
                    <div
                        class=class
                        on:click=move |_| store.board_index().set(Some(index))
                        on:dblclick=move |_| {
                            set_draft.set(for_rename.clone());
                            set_renaming.set(Some(index));
                        }
                    >
                        {move || if renaming.get() == Some(index) {
                            view! {
                                <input
                                    type="text"
                                    autofocus=true
                                    prop:value=move || draft.get()
                                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                                    on:blur=move |_| commit_rename(index)
                                    on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                                        "Enter" => commit_rename(index),
                                        "Escape" => set_renaming.set(None),
                                        _ => {}
                                    }
                                />
                            }.into_any()
                        } else {
                            view! { <span class="board-name">{shown.clone()}</span> }.into_any()
                        }}
                        <button
                            class="delete-btn"
                            on:click={
                                let name = name.clone();
                                move |ev| {
                                    ev.stop_propagation();
                                    pending.set(Some(PendingDelete::Board { index, name: name.clone() }));
                                }
                            }
                        >
                            "×"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
        <form class="add-board-form" on:submit=on_add>
            <input
                type="text"
                placeholder="New board..."
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit">"+"</button>
        </form>
    }
}
