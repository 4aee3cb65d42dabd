pub mod client;
pub mod error;

pub use client::{normalize_base_url, HttpUserApi, UserApi};
pub use error::ApiError;
