//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod employee_panel;

pub use app::App;
