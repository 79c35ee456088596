//! Authenticated access to the time-tracking API.

mod client;

pub use client::ApiClient;
