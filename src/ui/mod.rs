//! UI components for ModelDeck
//!
//! The model list view model and the Dioxus components that render it.

pub mod components;
pub mod local_models;
pub mod presentation;
pub mod view;
