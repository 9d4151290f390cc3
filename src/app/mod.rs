//! Native application shell for the scatter viewer.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`scatter_app`]   | [`ScatterApp`] (eframe) wrapper: top bar, canvas, input |
//! | [`info_window`]   | Floating details box for the selected point |
//! | [`screenshot`]    | Viewport capture to PNG |
//! | [`run`]           | Top-level [`run_viewer()`] entry point |

pub mod info_window;
mod run;
mod scatter_app;
pub mod screenshot;

pub use info_window::InfoWindow;
pub use run::run_viewer;
pub use scatter_app::ScatterApp;
