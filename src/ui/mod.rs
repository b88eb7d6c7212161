//! User Interface layer for pitwall
//!
//! - Theme record and provider (shared by every view)
//! - Reusable widgets
//! - Main render loop with route outlet, nav bar, status bar

pub mod render;
pub mod theme;
pub mod widgets;

pub use render::{render, render_baseline};
pub use theme::ThemeProvider;
