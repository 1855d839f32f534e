//! NocoDB client module for REST API communication

mod client;
mod traits;
mod types;

pub use client::NocoDbClient;
pub use traits::NocoDbApi;
pub use types::{RemoteTable, RemoteView};

#[cfg(test)]
pub use traits::MockNocoDbApi;
