//! Shared UI crate for the boxing-gym dashboard: data loading, statistics,
//! charts and every Dioxus component. Platform shells only host it.

pub mod charts;
pub mod components;
pub mod core;
pub mod dashboard;
pub mod dataset;
pub mod export;
pub mod i18n;
pub mod probability;
pub mod summary;
pub mod views;
