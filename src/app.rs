//! Kanban Board Frontend App
//!
//! Sidebar on the left, the open board on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::callback::Interval;
use reactive_stores::Store;

use crate::commands;
use crate::components::{Banner, BoardView, Sidebar};
use crate::context::{use_app_context, AppContext};
use crate::models::{Project, ProjectInfo};
use crate::store::{store_upsert_info, AppState, AppStateStoreFields, AppStore};

/// How a finished save leaves the open project
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Saved, and nothing changed while the save was in flight
    Clean,
    /// Saved, but the open project was edited meanwhile
    StillDirty,
    /// Backend refused; in-memory edits are kept
    Failed,
}

pub fn save_outcome(
    current: Option<&Project>,
    sent: &Project,
    result: &Result<Project, String>,
) -> SaveOutcome {
    match result {
        Err(_) => SaveOutcome::Failed,
        Ok(_) if current == Some(sent) => SaveOutcome::Clean,
        Ok(_) => SaveOutcome::StillDirty,
    }
}

/// Push the open project to the backend and wait for the answer.
///
/// Returns `false` only when the save failed. A failed save leaves the
/// in-memory edits and the dirty flag alone.
pub async fn save_open_project_now(store: AppStore, ctx: AppContext) -> bool {
    let Some(project) = store.project().get_untracked() else {
        return true;
    };
    let result = commands::save_project(&project).await;
    let outcome = store
        .project()
        .with_untracked(|p| save_outcome(p.as_ref(), &project, &result));
    match result {
        Ok(saved) => {
            web_sys::console::log_1(
                &format!("[SAVE] Saved {} ({} boards)", saved.name, saved.boards.len()).into(),
            );
            if outcome == SaveOutcome::Clean {
                store.dirty().set(false);
            }
            store_upsert_info(&store, ProjectInfo::from(&saved));
            true
        }
        Err(e) => {
            web_sys::console::log_1(&format!("[SAVE] Failed: {}", e).into());
            ctx.error(format!("Save failed: {}", e));
            false
        }
    }
}

/// Fire-and-forget save for the Save button and the auto-save timer
pub fn save_open_project(store: AppStore, ctx: AppContext) {
    spawn_local(async move {
        save_open_project_now(store, ctx).await;
    });
}

const MIN_AUTO_SAVE_SECS: u32 = 5;
const MAX_AUTO_SAVE_SECS: u32 = 24 * 60 * 60;

/// Timer period for the configured interval, kept within sane bounds
pub fn auto_save_period_ms(secs: u32) -> u32 {
    secs.clamp(MIN_AUTO_SAVE_SECS, MAX_AUTO_SAVE_SECS)
        .saturating_mul(1000)
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));
    let ctx = use_app_context();

    // Load the project list on mount and on reload
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading projects, trigger={}", trigger).into());
        spawn_local(async move {
            match commands::list_projects().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} projects", loaded.len()).into());
                    store.projects().set(loaded);
                }
                Err(e) => ctx.error(e),
            }
        });
    });

    // Settings once at start
    spawn_local(async move {
        match commands::get_settings().await {
            Ok(settings) => store.settings().set(settings),
            Err(e) => ctx.error(e),
        }
    });

    // Auto-save; restarted whenever the interval setting changes
    Effect::new(move |previous: Option<Interval>| {
        drop(previous);
        let secs = store.settings().with(|s| s.auto_save_interval_secs);
        let period = auto_save_period_ms(secs);
        web_sys::console::log_1(&format!("[SAVE] Auto-save every {}ms", period).into());
        Interval::new(period, move || {
            if store.dirty().get_untracked() {
                save_open_project(store, ctx);
            }
        })
    });

    let has_board = move || store.board_index().get().is_some();

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="main-content">
                <Banner />
                <Show
                    when=has_board
                    fallback=|| view! { <p class="empty-hint">"Open or create a project, then add a board."</p> }
                >
                    <BoardView />
                </Show>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str) -> Project {
        Project {
            id: "p".into(),
            name: name.into(),
            description: "d".into(),
            boards: vec![],
        }
    }

    #[test]
    fn test_failed_save_is_reported_as_failed() {
        let sent = project("P");
        let outcome = save_outcome(Some(&sent), &sent, &Err("disk full".into()));
        assert_eq!(outcome, SaveOutcome::Failed);
    }

    #[test]
    fn test_save_is_clean_only_when_unchanged() {
        let sent = project("P");
        let ok = Ok(sent.clone());
        assert_eq!(save_outcome(Some(&sent), &sent, &ok), SaveOutcome::Clean);
        assert_eq!(
            save_outcome(Some(&project("P edited")), &sent, &ok),
            SaveOutcome::StillDirty
        );
        assert_eq!(save_outcome(None, &sent, &ok), SaveOutcome::StillDirty);
    }

    #[test]
    fn test_auto_save_period_is_bounded() {
        assert_eq!(auto_save_period_ms(300), 300_000);
        assert_eq!(auto_save_period_ms(0), 5_000);
        assert_eq!(auto_save_period_ms(u32::MAX), 86_400_000);
        assert_eq!(auto_save_period_ms(5_000_000), 86_400_000);
    }
}
