//! ModelDeck Library
//!
//! Core library for the ModelDeck desktop panel: polls the backend for the
//! models available on this machine and renders them as cards.

pub mod app;
pub mod query;
pub mod storage;
pub mod types;
pub mod ui;
