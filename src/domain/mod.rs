//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Endpoint paths and request helpers
//! - `client.rs` — Sub-client with HTTP methods and result validation

pub mod caption;
