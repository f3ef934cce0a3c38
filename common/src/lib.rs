//! SnapLoop core – navigation matching and the content model, shared by
//! the server and the WASM client.

pub mod config;
pub mod content;
pub mod error;
pub mod nav;
