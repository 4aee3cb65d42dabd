// Library exports for integration tests and reusable components

pub mod api;
pub mod config;
pub mod models;
pub mod users;

#[doc(hidden)]
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

// Test support (unit tests, or downstream tests with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
