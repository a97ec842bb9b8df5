//! Local models panel
//!
//! Lists the models the backend reports, refreshed by the model query.

use crate::app::AppState;
use crate::query::ModelQuery;
use crate::storage::settings::save_settings;
use crate::types::query::QueryState;
use crate::ui::components::badge::{OutlinePill, Pill};
use crate::ui::components::loading::{RefreshIcon, Spinner};
use crate::ui::view::{build_view, ModelCard, ModelsView, EMPTY_MESSAGE, EMPTY_TITLE};
use dioxus::prelude::*;
use tokio::sync::watch;

/// Hand every state published on `updates` to `apply`, starting with the
/// current one. Returns once the query is gone.
pub async fn follow_states(
    mut updates: watch::Receiver<QueryState>,
    mut apply: impl FnMut(QueryState),
) {
    loop {
        let next = updates.borrow_and_update().clone();
        apply(next);
        if updates.changed().await.is_err() {
            break;
        }
    }
}

/// Subscribe to the model query held in the app state.
///
/// The returned signal follows every state the query publishes.
pub fn use_local_models() -> (Signal<QueryState>, ModelQuery) {
    let query = use_context::<AppState>().models.clone();
    let mut state = use_signal(|| query.snapshot());

    {
        let query = query.clone();
        use_future(move || follow_states(query.subscribe(), move |next| state.set(next)));
    }

    (state, query)
}

#[component]
pub fn LocalModels() -> Element {
    let (state, query) = use_local_models();
    let mut settings = use_context::<AppState>().settings;
    let is_dark = settings.read().theme == "dark";
    let snapshot = state.read().clone();
    let view = build_view(&snapshot.data, snapshot.is_loading);
    let header = view.header();
    let updated = snapshot
        .updated_at
        .map(|at| at.with_timezone(&chrono::Local).format("%H:%M:%S").to_string());

    rsx! {
        div {
            class: "flex flex-col gap-4 max-w-3xl mx-auto w-full p-6",

            // Header with refresh
            div {
                class: "flex items-center justify-between",
                div {
                    h2 { class: "text-lg font-semibold text-[var(--text-primary)]", "Local Models" }
                    p { class: "text-xs text-[var(--text-tertiary)] mt-0.5", "{header}" }
                }
                div {
                    class: "flex items-center gap-3",
                    if let Some(updated) = updated {
                        span { class: "text-[10px] font-mono text-[var(--text-tertiary)]", "Updated {updated}" }
                    }
                    button {
                        class: "text-xs text-[var(--text-tertiary)] hover:text-[var(--text-primary)] transition-colors px-2 py-1 rounded-lg hover:bg-white/[0.06]",
                        title: "Toggle theme",
                        onclick: move |_| {
                            let mut settings = settings.write();
                            settings.theme = if settings.theme == "dark" { "light" } else { "dark" }.to_string();
                            if let Err(error) = save_settings(&settings) {
                                tracing::error!("Failed to save settings: {}", error);
                            }
                        },
                        if is_dark { "Light" } else { "Dark" }
                    }
                    button {
                        class: "text-[var(--text-tertiary)] hover:text-[var(--text-primary)] transition-colors p-1.5 rounded-lg hover:bg-white/[0.06] disabled:opacity-50",
                        title: "Refresh models",
                        disabled: snapshot.is_fetching || snapshot.is_loading,
                        onclick: move |_| query.refetch(),
                        RefreshIcon { spinning: snapshot.is_fetching || snapshot.is_loading }
                    }
                }
            }

            match view {
                ModelsView::Loading => rsx! {
                    div {
                        class: "flex items-center justify-center gap-3 p-8 rounded-2xl glass-md",
                        Spinner { size: 16 }
                        span { class: "text-sm text-[var(--text-secondary)]", "Looking for models served on this machine..." }
                    }
                },
                ModelsView::Empty => rsx! {
                    div {
                        class: "flex flex-col items-center justify-center gap-2 p-8 border border-dashed border-[var(--border-subtle)] rounded-2xl",
                        span { class: "text-sm font-medium text-[var(--text-secondary)]", "{EMPTY_TITLE}" }
                        span { class: "text-xs text-[var(--text-tertiary)] text-center max-w-sm", "{EMPTY_MESSAGE}" }
                    }
                },
                ModelsView::Populated(cards) => rsx! {
                    div {
                        class: "flex flex-col gap-3",
                        for card in cards {
                            ModelCardView { key: "{card.key}", card: card.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ModelCardView(card: ModelCard) -> Element {
    rsx! {
        div {
            class: "p-4 rounded-2xl glass-md flex flex-col gap-3",

            div {
                class: "flex items-start justify-between gap-3",
                div {
                    class: "flex items-center gap-3 min-w-0",
                    span { class: "text-2xl leading-none select-none", "{card.icon}" }
                    div {
                        class: "min-w-0",
                        div { class: "font-semibold text-[var(--text-primary)] truncate", "{card.name}" }
                        div {
                            class: "flex flex-wrap items-center gap-1.5 mt-1",
                            OutlinePill { label: card.type_label.clone() }
                            Pill {
                                label: card.specialization.label.clone(),
                                tone: card.specialization.class.to_string(),
                            }
                        }
                    }
                }
                Pill { label: card.status.label.clone(), tone: card.status.class.to_string() }
            }

            div {
                class: "flex gap-4 text-xs text-[var(--text-secondary)]",
                span { class: "font-mono", "{card.memory}" }
                span { "{card.capability_count}" }
            }

            if !card.capabilities.is_empty() {
                div {
                    class: "flex flex-wrap gap-1.5",
                    for capability in card.capabilities.iter() {
                        span {
                            key: "{capability.key}",
                            class: "px-2 py-0.5 rounded-md text-[10px] bg-white/[0.04] text-[var(--text-secondary)] border border-[var(--border-subtle)]",
                            "{capability.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn loaded(count: u32) -> QueryState {
        QueryState {
            is_loading: false,
            failure_count: count,
            ..QueryState::default()
        }
    }

    #[tokio::test]
    async fn test_follow_states_starts_with_current_state() {
        let (tx, rx) = watch::channel(loaded(7));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let follower = tokio::spawn(follow_states(rx, move |state| {
            sink.lock().unwrap().push(state)
        }));
        drop(tx);
        follower.await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![loaded(7)]);
    }

    #[tokio::test]
    async fn test_follow_states_tracks_published_states() {
        let (tx, rx) = watch::channel(QueryState::default());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let follower = tokio::spawn(follow_states(rx, move |state| {
            sink.lock().unwrap().push(state)
        }));

        tokio::task::yield_now().await;
        tx.send(loaded(1)).unwrap();
        tokio::task::yield_now().await;
        tx.send(loaded(2)).unwrap();
        drop(tx);
        follower.await.unwrap();

        let seen = seen.lock().unwrap();
        assert!(seen.len() >= 2);
        assert!(seen.first().unwrap().is_loading);
        assert_eq!(seen.last(), Some(&loaded(2)));
    }
}
