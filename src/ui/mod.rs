// Module declarations
mod app;
mod components;
pub mod image;
mod renderer;
mod utils;
pub mod view;
// Re-exports for external use
pub use app::{App, UIConfig, run};
