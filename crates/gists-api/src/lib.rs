//! HTTP facade and data model for the GitHub Gists REST API.

pub mod client;
pub mod errors;
pub mod http;
pub mod model;

pub use client::{ApiResponse, Auth, Client};
pub use errors::ApiError;
