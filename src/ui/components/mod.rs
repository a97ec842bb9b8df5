//! Reusable UI building blocks

pub mod badge;
pub mod loading;
