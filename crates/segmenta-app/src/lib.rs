//! Segmenta demo application
//!
//! A single native window showing the segmented picker and the segmented
//! tab bar wired to shared selection state.

mod app;
mod ui;

pub use app::{App, AppConfig, AppError};
pub use ui::{Category, DemoState, TabType, render_ui};
