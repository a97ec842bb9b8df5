use dioxus::prelude::*;

/// Small rounded label
#[component]
pub fn Pill(label: String, tone: String) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center px-2 py-0.5 rounded-full text-[10px] font-semibold tracking-wide {tone}",
            "{label}"
        }
    }
}

/// Neutral outlined label
#[component]
pub fn OutlinePill(label: String) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center px-2 py-0.5 rounded-full text-[10px] font-medium border border-[var(--border-subtle)] text-[var(--text-secondary)]",
            "{label}"
        }
    }
}
