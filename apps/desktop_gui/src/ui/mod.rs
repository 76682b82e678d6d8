//! UI layer for the desktop host: app shell and chart painting.

pub mod app;
pub mod chart;

pub use app::PanelApp;
