pub mod app;
pub mod app_context;
pub mod components;

pub use app::*;
pub use app_context::*;
pub use components::*;

// Re-export constants from app module
pub use app::{MAIN_CSS, TAILWIND_CSS};
