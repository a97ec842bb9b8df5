//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::query::{HttpModelSource, ModelQuery, ModelSource};
use crate::storage::settings::{load_settings, PanelSettings};
use crate::ui::local_models::LocalModels;
use dioxus::prelude::*;
use std::sync::Arc;

/// Injected into the webview head: Tailwind and the theme variables the
/// components use
pub const CUSTOM_HEAD: &str = r#"
<script src="https://cdn.tailwindcss.com"></script>
<script>tailwind.config = { darkMode: 'class' }</script>
<style>
  :root {
    --text-primary: #1c1917;
    --text-secondary: #44403c;
    --text-tertiary: #78716c;
    --border-subtle: rgba(28,25,23,0.10);
    --accent-primary: #c2410c;
    --accent-secondary: #0f766e;
    --accent-tertiary: #a16207;
    --destructive: #dc2626;
    --bg-app: #f5f5f4;
  }
  .dark {
    --text-primary: #f2ede7;
    --text-secondary: #c9c2b9;
    --text-tertiary: #8a837b;
    --border-subtle: rgba(242,237,231,0.08);
    --bg-app: #141210;
  }
  body { margin: 0; }
  .glass-md {
    background: rgba(242,237,231,0.03);
    border: 1px solid var(--border-subtle);
    backdrop-filter: blur(12px);
  }
</style>
"#;

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub models: ModelQuery,
    pub settings: Signal<PanelSettings>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let models = ModelQuery::spawn(build_source(&settings), settings.refresh_interval());

        Self {
            models,
            settings: Signal::new(settings),
        }
    }
}

fn build_source(settings: &PanelSettings) -> Arc<dyn ModelSource> {
    match HttpModelSource::new(settings.models_url(), settings.request_timeout()) {
        Ok(source) => {
            tracing::info!("Reading local models from {}", source.url());
            Arc::new(source)
        }
        Err(e) => {
            tracing::error!("Failed to build HTTP client, using defaults: {}", e);
            Arc::new(HttpModelSource::with_client(
                reqwest::Client::new(),
                settings.models_url(),
            ))
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);
    let theme = app_state.settings.read().theme.clone();

    rsx! {
        div {
            class: "{theme} min-h-screen",
            div {
                class: "min-h-screen bg-[var(--bg-app)] text-[var(--text-primary)]",
                LocalModels {}
            }
        }
    }
}
