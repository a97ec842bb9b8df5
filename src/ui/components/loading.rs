use dioxus::prelude::*;

/// Spinning ring used while something is in progress
#[component]
pub fn Spinner(size: u32) -> Element {
    rsx! {
        div {
            class: "animate-spin rounded-full border-2 border-[var(--border-subtle)] border-t-[var(--accent-primary)]",
            style: "width: {size}px; height: {size}px;",
        }
    }
}

/// Circular arrows, spinning while `spinning` is set
#[component]
pub fn RefreshIcon(spinning: bool) -> Element {
    let class = if spinning { "w-4 h-4 animate-spin" } else { "w-4 h-4" };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M23 4v6h-6" }
            path { d: "M1 20v-6h6" }
            path { d: "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15" }
        }
    }
}
