//! GUI module - interactive chart window

mod app;

pub use app::show_distribution_window;
